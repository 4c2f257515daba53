use steer_agent::AgentError;
use steer_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {agent}: {source}")]
    Agent {
        agent: AgentId,
        #[source]
        source: AgentError,
    },
}

pub type SimResult<T> = Result<T, SimError>;

use steer_behavior::BehaviorError;
use steer_core::{AgentId, PathId};
use thiserror::Error;

/// Errors produced while blending and applying an agent's behavior set.
///
/// Every variant is a configuration error — a tick either completes
/// deterministically or the setup was wrong.  No retries.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("behavior set has no slots")]
    NoSlots,

    #[error("slot weight {0} outside (0, 1]")]
    InvalidWeight(f32),

    #[error("slots can affect the {0} channel but their weights sum to zero")]
    DegenerateWeights(&'static str),

    #[error("target agent {0} not found in this tick's snapshot")]
    TargetAgentNotFound(AgentId),

    #[error("path {0} not registered")]
    PathNotFound(PathId),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type AgentResult<T> = Result<T, AgentError>;

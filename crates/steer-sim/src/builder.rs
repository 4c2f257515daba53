//! Fluent builder for constructing a [`Sim`].

use steer_agent::{BehaviorSet, SteeringAgent};
use steer_core::{AgentId, LayerMask, PathId, SimConfig, Vec2};
use steer_path::Path;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// Registers paths and agents, handing back the `PathId`/`AgentId` the
/// caller needs to wire follow-path slots and agent-target references:
///
/// ```rust,ignore
/// let mut builder = SimBuilder::new(SimConfig::new(1_000, 42));
/// let patrol = builder.add_path(Path::from_points(corners, true));
/// let guard  = builder.add_agent(Vec2::ZERO, guard_set(patrol));
/// builder.add_agent(Vec2::new(8.0, 0.0), evade_set(guard));
/// let mut sim = builder.build()?;
/// ```
///
/// `build` validates the configuration and pre-normalizes every agent's
/// blend weights, so weight errors surface at setup rather than first tick.
pub struct SimBuilder {
    config: SimConfig,
    agents: Vec<SteeringAgent>,
    paths: Vec<Path>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            agents: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Register an authored path, returning the id follow-path slots refer
    /// to it by.
    pub fn add_path(&mut self, path: Path) -> PathId {
        let id = PathId(self.paths.len() as u32);
        self.paths.push(path);
        id
    }

    /// Add an agent on the default layer.  IDs are dense and assigned in
    /// insertion order.
    pub fn add_agent(&mut self, position: Vec2, behaviors: BehaviorSet) -> AgentId {
        self.add_agent_on_layer(position, behaviors, LayerMask::default())
    }

    /// Add an agent occupying `layer`.
    pub fn add_agent_on_layer(
        &mut self,
        position: Vec2,
        behaviors: BehaviorSet,
        layer: LayerMask,
    ) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(
            SteeringAgent::new(id, position, behaviors, self.config.seed).with_layer(layer),
        );
        id
    }

    /// Mutable access to an agent added earlier, for kinematic tweaks
    /// (initial velocity, custom limits) before the run starts.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut SteeringAgent> {
        self.agents.get_mut(id.index())
    }

    /// Validate and assemble the simulation.
    pub fn build(mut self) -> SimResult<Sim> {
        if !(self.config.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "dt_secs must be positive, got {}",
                self.config.dt_secs
            )));
        }

        for agent in &mut self.agents {
            agent
                .behaviors
                .normalize_weights()
                .map_err(|source| SimError::Agent {
                    agent: agent.id,
                    source,
                })?;
        }

        #[cfg(feature = "parallel")]
        if let Some(n) = self.config.num_threads {
            // A global pool can only be installed once per process; later
            // builders keep whatever pool already exists.
            let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
        }

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agents: self.agents,
            paths: self.paths,
        })
    }
}

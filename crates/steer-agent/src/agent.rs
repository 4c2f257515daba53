//! A complete steerable agent: kinematic state, behavior set, RNG.

use steer_behavior::Target;
use steer_core::{AgentId, AgentRng, AgentState, LayerMask, Vec2};

use crate::context::TickContext;
use crate::set::BehaviorSet;
use crate::{AgentResult, integrate};

/// One autonomous agent.
///
/// Owns everything its tick mutates — state, per-slot scratch (inside the
/// behavior set), and its deterministic RNG — so ticks for different agents
/// are independent given a shared read-only [`TickContext`].
pub struct SteeringAgent {
    pub id: AgentId,
    pub state: AgentState,
    pub behaviors: BehaviorSet,
    /// Layers this agent occupies, reported by neighbor snapshots.
    pub layer: LayerMask,
    rng: AgentRng,
}

impl SteeringAgent {
    /// Create an agent at `position` with its RNG seeded from the run seed.
    pub fn new(id: AgentId, position: Vec2, behaviors: BehaviorSet, global_seed: u64) -> Self {
        Self {
            id,
            state: AgentState::at(position),
            behaviors,
            layer: LayerMask::default(),
            rng: AgentRng::new(global_seed, id),
        }
    }

    pub fn with_layer(mut self, layer: LayerMask) -> Self {
        self.layer = layer;
        self
    }

    /// Run one full steering tick: blend the behavior set, then integrate
    /// the result into the agent's state.
    pub fn tick<F>(&mut self, ctx: &TickContext<'_>, resolve_agent: F) -> AgentResult<()>
    where
        F: Fn(AgentId) -> Option<Target>,
    {
        let steering = self
            .behaviors
            .steer(&self.state, ctx, &mut self.rng, resolve_agent)?;
        integrate(&mut self.state, steering, ctx.dt);
        Ok(())
    }
}

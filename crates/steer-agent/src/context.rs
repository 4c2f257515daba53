//! Read-only per-tick inputs shared by all of one agent's slots.

use steer_behavior::NeighborQuery;
use steer_core::AgentId;
use steer_path::Path;

/// A read-only view of one tick, built by the host (or the sim crate) and
/// shared across every slot evaluation of an agent.
///
/// # Lifetimes
///
/// All borrows live for the duration of one agent's tick.  The host never
/// mutates the path registry or the spatial snapshot while a `TickContext`
/// is live.
pub struct TickContext<'a> {
    /// Fixed timestep, seconds.
    pub dt: f32,

    /// The agent being steered.
    pub self_id: AgentId,

    /// Path registry, indexed by `PathId`.
    pub paths: &'a [Path],

    /// Spatial snapshot for neighbor queries, consistent for the whole tick.
    pub neighbors: &'a dyn NeighborQuery,
}

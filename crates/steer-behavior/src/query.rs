//! The neighbor-query seam consumed by the separation behavior.
//!
//! # Pluggability
//!
//! Behaviors see neighbors only through the [`NeighborQuery`] trait, so hosts
//! can back it with whatever spatial structure they already have (the sim
//! crate provides an R-tree snapshot index; engines typically adapt their
//! physics broadphase).  Implementations are expected to cap their result
//! sets at a bounded size — separation is a local reaction, not an all-pairs
//! force.

use steer_core::{AgentId, LayerMask, Vec2};

/// One entry of a neighbor-query result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// Owning entity, compared against the querying agent for self-exclusion.
    pub id: AgentId,
    pub position: Vec2,
}

/// Read-only spatial lookup over a consistent tick-start snapshot.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: with the sim crate's `parallel`
/// feature many agents query the same snapshot concurrently.
pub trait NeighborQuery: Send + Sync {
    /// All colliders within `radius` of `center` whose layers intersect
    /// `layers`, in no particular order, capped at the implementation's
    /// result bound.  May include the querying agent itself — callers filter
    /// by id.
    fn neighbors_within(&self, center: Vec2, radius: f32, layers: LayerMask) -> Vec<Neighbor>;
}

/// A [`NeighborQuery`] that never finds anyone.
///
/// Useful for tests and for agents whose behavior sets contain no separation
/// slot.
pub struct NoNeighbors;

impl NeighborQuery for NoNeighbors {
    fn neighbors_within(&self, _center: Vec2, _radius: f32, _layers: LayerMask) -> Vec<Neighbor> {
        Vec::new()
    }
}

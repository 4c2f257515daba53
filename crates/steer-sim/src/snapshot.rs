//! Per-tick spatial snapshot: agent poses plus an R-tree neighbor index.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use steer_behavior::{Neighbor, NeighborQuery, Target};
use steer_core::{AgentId, LayerMask, Vec2};

/// Default cap on neighbor-query result sets.  Separation is a local
/// reaction; seven nearby pushers are plenty.
pub const DEFAULT_MAX_RESULTS: usize = 7;

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// One agent's pose as captured at tick start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub position: Vec2,
    pub orientation: f32,
    pub layer: LayerMask,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D point with the owning agent and its
/// layers.
#[derive(Clone)]
struct SnapshotEntry {
    point: [f32; 2],
    id: AgentId,
    layer: LayerMask,
}

impl RTreeObject for SnapshotEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SnapshotEntry {
    /// Squared Euclidean distance — what `locate_within_distance` compares
    /// against.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NeighborIndex ─────────────────────────────────────────────────────────────

/// The tick's consistent spatial read view: every agent's snapshot, indexed
/// both by `AgentId` (target resolution) and spatially (neighbor queries).
///
/// Built once per tick and never mutated while agents read it, so the
/// `parallel` feature can share it freely across workers.
pub struct NeighborIndex {
    snapshots: Vec<AgentSnapshot>,
    tree: RTree<SnapshotEntry>,
    max_results: usize,
}

impl NeighborIndex {
    /// Bulk-load the index.  `snapshots` must be ordered by `AgentId` —
    /// entry `i` is agent `i` — which is how [`Sim`][crate::Sim] stores its
    /// agents.
    pub fn build(snapshots: Vec<AgentSnapshot>) -> Self {
        debug_assert!(
            snapshots.iter().enumerate().all(|(i, s)| s.id.index() == i),
            "snapshot order must match AgentId"
        );

        let entries = snapshots
            .iter()
            .map(|s| SnapshotEntry {
                point: [s.position.x, s.position.y],
                id: s.id,
                layer: s.layer,
            })
            .collect();

        Self {
            snapshots,
            tree: RTree::bulk_load(entries),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override the query result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn snapshots(&self) -> &[AgentSnapshot] {
        &self.snapshots
    }

    /// The tick-start pose of `agent`, as a steering target.
    pub fn resolve(&self, agent: AgentId) -> Option<Target> {
        self.snapshots
            .get(agent.index())
            .map(|s| Target::pose(s.position, s.orientation))
    }
}

impl NeighborQuery for NeighborIndex {
    fn neighbors_within(&self, center: Vec2, radius: f32, layers: LayerMask) -> Vec<Neighbor> {
        self.tree
            .locate_within_distance([center.x, center.y], radius * radius)
            .filter(|entry| entry.layer.intersects(layers))
            .take(self.max_results)
            .map(|entry| Neighbor {
                id: entry.id,
                position: Vec2::new(entry.point[0], entry.point[1]),
            })
            .collect()
    }
}

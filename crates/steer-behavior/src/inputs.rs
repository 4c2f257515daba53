//! Resolved per-slot inputs for one evaluation.

use steer_core::{AgentId, Vec2};
use steer_path::Path;

use crate::query::NeighborQuery;
use crate::{BehaviorError, BehaviorResult};

// ── Target ────────────────────────────────────────────────────────────────────

/// A resolved steering target: a position and, for orientation-matching
/// behaviors, a heading.
///
/// Resolution happens outside the behaviors — the host (or the sim crate's
/// snapshot) turns "that agent" or "this point" into a `Target` before
/// evaluation, so behaviors never chase stale references.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub position: Vec2,
    /// Heading in degrees, `[0, 360)`.  0 for plain point targets.
    pub orientation: f32,
}

impl Target {
    /// A positional target with no meaningful heading.
    pub fn point(position: Vec2) -> Self {
        Self {
            position,
            orientation: 0.0,
        }
    }

    /// A full pose target (another agent, typically).
    pub fn pose(position: Vec2, orientation: f32) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

// ── SteerInputs ───────────────────────────────────────────────────────────────

/// Everything one slot's evaluation may read this tick, resolved and
/// read-only.
///
/// Assembled per slot by the blender; borrows live for a single evaluation.
pub struct SteerInputs<'a> {
    /// Fixed timestep of the current tick, seconds.
    pub dt: f32,

    /// Identity of the agent being steered — used by separation to exclude
    /// itself from neighbor results.
    pub self_id: AgentId,

    /// The slot's resolved target, if it has one.
    pub target: Option<Target>,

    /// The slot's path, if it follows one.
    pub path: Option<&'a Path>,

    /// Read-only spatial snapshot for neighbor queries, consistent for the
    /// whole tick.
    pub neighbors: &'a dyn NeighborQuery,
}

impl<'a> SteerInputs<'a> {
    /// The target, or `MissingTarget` for behaviors that cannot run without
    /// one.
    pub fn require_target(&self) -> BehaviorResult<Target> {
        self.target.ok_or(BehaviorError::MissingTarget)
    }

    /// The path, or `MissingPath` for behaviors that cannot run without one.
    pub fn require_path(&self) -> BehaviorResult<&'a Path> {
        self.path.ok_or(BehaviorError::MissingPath)
    }
}

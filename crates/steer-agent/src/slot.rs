//! One behavior attachment on an agent.

use steer_core::{AgentId, PathId, Vec2};
use steer_behavior::{BehaviorScratch, SteeringBehavior};

use crate::{AgentError, AgentResult};

// ── TargetRef ─────────────────────────────────────────────────────────────────

/// What a slot steers relative to, before per-tick resolution.
///
/// `Point`/`Pose` resolve to themselves; `Agent` is resolved by the host
/// against its tick-start snapshot, so every slot targeting the same agent
/// sees the same position within a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRef {
    /// A fixed world point.
    Point(Vec2),
    /// A fixed point with a heading (for align-style behaviors).
    Pose { position: Vec2, orientation: f32 },
    /// Another agent's current pose.
    Agent(AgentId),
}

// ── BehaviorSlot ──────────────────────────────────────────────────────────────

/// One entry in an agent's behavior list: a behavior, its blend weights, the
/// inputs it steers against, and its private scratch state.
///
/// Weights live in `(0, 1]` as configured and are normalized per capability
/// channel by [`BehaviorSet`][crate::BehaviorSet] before use.  Scratch is
/// owned exclusively by this slot — prediction samples and wander headings
/// are never shared between slots or agents.
#[derive(Clone, Debug)]
pub struct BehaviorSlot {
    pub behavior: SteeringBehavior,
    pub velocity_weight: f32,
    pub rotation_weight: f32,
    pub target: Option<TargetRef>,
    pub path: Option<PathId>,
    pub scratch: BehaviorScratch,
}

impl BehaviorSlot {
    /// A slot with full weight on both channels and no target or path.
    pub fn new(behavior: SteeringBehavior) -> Self {
        Self {
            behavior,
            velocity_weight: 1.0,
            rotation_weight: 1.0,
            target: None,
            path: None,
            scratch: BehaviorScratch::new(),
        }
    }

    /// Set both blend weights, validating they lie in `(0, 1]`.
    pub fn with_weights(mut self, velocity: f32, rotation: f32) -> AgentResult<Self> {
        for w in [velocity, rotation] {
            if !(w > 0.0 && w <= 1.0) {
                return Err(AgentError::InvalidWeight(w));
            }
        }
        self.velocity_weight = velocity;
        self.rotation_weight = rotation;
        Ok(self)
    }

    pub fn with_target(mut self, target: TargetRef) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_path(mut self, path: PathId) -> Self {
        self.path = Some(path);
        self
    }
}

//! Per-slot mutable evaluation state.

use steer_core::Vec2;

/// Mutable state a behavior carries between ticks, owned exclusively by one
/// behavior slot — never shared across slots or agents.
///
/// Created in the "no observation yet" state when a slot is attached;
/// behaviors that predict from two target samples return a zero output on
/// their first evaluation while the initial sample is recorded.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorScratch {
    /// Target position seen on the previous tick.  `None` until the first
    /// evaluation — an explicit state, not a sentinel position.
    pub last_target_position: Option<Vec2>,

    /// Accumulated wander heading offset, degrees.  An unbounded random
    /// walk; only its sine/cosine ever matter.
    pub wander_angle: f32,

    /// Station currently being followed in the station-based follow-path
    /// modes.  Starts at 0; the catch-up rule may immediately correct it.
    pub current_station: usize,
}

impl BehaviorScratch {
    /// Fresh scratch with no observations.
    pub fn new() -> Self {
        Self::default()
    }
}

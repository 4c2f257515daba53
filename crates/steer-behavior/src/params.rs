//! Per-variant behavior parameters.
//!
//! Defaults are the tuning the behaviors were calibrated with; hosts
//! override per archetype (enable the `serde` feature to load them from
//! files).  Radii are world units, rates are degrees, times are seconds.

use steer_core::LayerMask;

// ── Seek / Flee ───────────────────────────────────────────────────────────────

/// Parameters for the seek behavior (and everything that delegates to it:
/// pursue and follow-path).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekParams {
    /// At what distance to the target the agent starts slowing down.
    pub slow_down_radius: f32,
    /// At what distance to the target the agent stops.
    pub target_radius: f32,
    /// How long reaching the desired velocity should take, in theory.
    pub time_to_target: f32,
}

impl Default for SeekParams {
    fn default() -> Self {
        Self {
            slow_down_radius: 3.0,
            target_radius: 1.0,
            time_to_target: 0.1,
        }
    }
}

/// Parameters for the flee behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeParams {
    /// Radius within which the agent reacts to the threat at all.
    pub detection_radius: f32,
    pub time_to_target: f32,
}

impl Default for FleeParams {
    fn default() -> Self {
        Self {
            detection_radius: 5.0,
            time_to_target: 0.1,
        }
    }
}

// ── Align (and the behaviors that delegate to it) ─────────────────────────────

/// Parameters for align, face, and look-where-you're-going.
///
/// Radii here are *angular*, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignParams {
    /// Rotation magnitude below which the agent counts as aligned.
    pub target_radius: f32,
    /// Rotation magnitude below which the turn rate ramps down.
    pub slowdown_radius: f32,
    pub time_to_target: f32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            target_radius: 5.0,
            slowdown_radius: 20.0,
            time_to_target: 0.1,
        }
    }
}

// ── Prediction behaviors ──────────────────────────────────────────────────────

/// Parameters for pursue: seek toward the target's predicted position.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursueParams {
    pub prediction: PredictionParams,
    pub seek: SeekParams,
}

/// Parameters for evade: flee from the target's predicted position.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvadeParams {
    pub prediction: PredictionParams,
    pub flee: FleeParams,
}

/// The shared prediction-horizon knob of pursue and evade.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionParams {
    /// Upper bound on how far into the future the target is extrapolated,
    /// in seconds.
    pub max_prediction: f32,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self { max_prediction: 1.0 }
    }
}

/// Parameters for velocity matching.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VelocityMatchParams {
    pub time_to_target: f32,
}

impl Default for VelocityMatchParams {
    fn default() -> Self {
        Self { time_to_target: 0.1 }
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

/// Parameters for the wander random walk.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderParams {
    /// Per-tick bound on the heading-offset increment, degrees.
    pub wander_rate: f32,
    /// How far ahead of the agent the wander circle sits.
    pub wander_offset: f32,
    /// Radius of the wander circle.
    pub wander_radius: f32,
    /// Turn tuning for facing the aim point.
    pub align: AlignParams,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self {
            wander_rate: 20.0,
            wander_offset: 1.0,
            wander_radius: 0.5,
            align: AlignParams::default(),
        }
    }
}

// ── Separate ──────────────────────────────────────────────────────────────────

/// Parameters for the separation behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparateParams {
    /// Neighbor-query radius.
    pub target_radius: f32,
    /// Scales the distance-squared repulsion strength.
    pub decay_coefficient: f32,
    /// Which layers count as neighbors.
    pub layers: LayerMask,
}

impl Default for SeparateParams {
    fn default() -> Self {
        Self {
            target_radius: 1.0,
            decay_coefficient: 0.5,
            layers: LayerMask::ALL,
        }
    }
}

// ── FollowPath ────────────────────────────────────────────────────────────────

/// How a follow-path slot traverses its path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowMode {
    /// Seek the current station; advance when the next station's incoming
    /// segment is closer than the current one, or when the station is
    /// reached.
    #[default]
    Station,
    /// Advance only when the current station is physically reached.  Simpler,
    /// but can oscillate if the agent overshoots.
    AlwaysReachStation,
    /// Project onto the path and seek a point a fixed percent ahead.
    Path,
    /// Like `Path`, but projects from a velocity-extrapolated position to
    /// compensate for seek lag at speed.
    PredictivePath,
}

/// Parameters for the follow-path behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowPathParams {
    pub mode: FollowMode,
    /// Look-ahead along the path in percent of total length
    /// (`Path`/`PredictivePath` modes).
    pub follow_ahead_percent: f32,
    /// Velocity extrapolation time in seconds (`PredictivePath` mode).
    pub predict_time: f32,
    /// Seek tuning; `seek.target_radius` doubles as the station-reached
    /// radius of the station modes.
    pub seek: SeekParams,
}

impl FollowPathParams {
    pub fn new(mode: FollowMode) -> Self {
        Self {
            mode,
            follow_ahead_percent: 0.1,
            predict_time: 0.1,
            seek: SeekParams::default(),
        }
    }
}

impl Default for FollowPathParams {
    fn default() -> Self {
        Self::new(FollowMode::default())
    }
}

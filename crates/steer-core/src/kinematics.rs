//! Per-agent kinematic state and movement limits.

use glam::Vec2;

use crate::angle;

// ── KinematicLimits ───────────────────────────────────────────────────────────

/// Movement caps for one agent.  All values are positive; angular quantities
/// are degrees per second.
///
/// Externally editable configuration — hosts typically load these per agent
/// archetype (enable the `serde` feature for file formats).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicLimits {
    /// Top speed, units per second.
    pub max_speed: f32,
    /// Top linear acceleration, units per second².
    pub max_acceleration: f32,
    /// Top angular acceleration, degrees per second².
    pub max_angular_acceleration: f32,
    /// Top angular velocity, degrees per second.
    pub max_rotation: f32,
}

impl Default for KinematicLimits {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            max_acceleration: 20.0,
            max_angular_acceleration: 30.0,
            max_rotation: 20.0,
        }
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// The kinematic state of one agent, owned by the simulation host.
///
/// Invariant: after every integration step `|velocity| <= limits.max_speed`
/// and `|angular_velocity| <= limits.max_rotation`.  Mid-step the raw values
/// may exceed the caps; only post-step state is bounded.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// World position.
    pub position: Vec2,
    /// Heading in degrees, wrapped to `[0, 360)`.
    pub orientation: f32,
    /// Current velocity, units per second.
    pub velocity: Vec2,
    /// Current angular velocity, degrees per second.
    pub angular_velocity: f32,
    /// Movement caps.
    pub limits: KinematicLimits,
}

impl AgentState {
    /// A resting agent at `position` facing orientation 0, default limits.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            orientation: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            limits: KinematicLimits::default(),
        }
    }

    /// Replace the movement caps (builder-style).
    pub fn with_limits(mut self, limits: KinematicLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Current speed, units per second.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Unit vector along the agent's heading.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        angle::forward(self.orientation)
    }
}

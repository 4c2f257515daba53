//! The steering result type: a desired linear + angular acceleration.

use std::ops::{Add, AddAssign};

use glam::Vec2;

/// One behavior's (or blend's) desired accelerations for the current tick.
///
/// Combining outputs is plain component-wise addition; the blender scales by
/// weights before summing.  Clamps preserve direction — a too-large request
/// is rescaled, never zeroed.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringOutput {
    /// Linear acceleration, units per second².
    pub linear: Vec2,
    /// Angular acceleration, degrees per second².
    pub angular: f32,
}

impl SteeringOutput {
    /// The do-nothing output.
    pub const ZERO: SteeringOutput = SteeringOutput {
        linear: Vec2::ZERO,
        angular: 0.0,
    };

    #[inline]
    pub fn new(linear: Vec2, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Clamp both channels to the given limits.
    pub fn limit(&mut self, linear_limit: f32, angular_limit: f32) {
        self.limit_linear(linear_limit);
        self.limit_angular(angular_limit);
    }

    /// Rescale `linear` to magnitude `limit` if it exceeds it.
    pub fn limit_linear(&mut self, limit: f32) {
        let magnitude = self.linear.length();
        if magnitude > limit {
            self.linear *= limit / magnitude;
        }
    }

    /// Clamp `angular` to `±limit`, keeping its sign.
    pub fn limit_angular(&mut self, limit: f32) {
        if self.angular.abs() > limit {
            self.angular = limit * self.angular.signum();
        }
    }
}

impl Add for SteeringOutput {
    type Output = SteeringOutput;
    #[inline]
    fn add(self, rhs: SteeringOutput) -> SteeringOutput {
        SteeringOutput {
            linear: self.linear + rhs.linear,
            angular: self.angular + rhs.angular,
        }
    }
}

impl AddAssign for SteeringOutput {
    #[inline]
    fn add_assign(&mut self, rhs: SteeringOutput) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

//! Kinematic integration of a blended steering output.

use steer_core::{AgentState, SteeringOutput, Vec2, angle};

/// Apply one tick of `steering` to `state`.
///
/// Order matters: position and orientation integrate with the *pre-update*
/// velocity and angular velocity, so an acceleration affects displacement
/// one tick after it is requested.  After the update, speed is clamped to
/// `max_speed` (rescaled, direction preserved) and angular velocity to
/// `±max_rotation` (sign preserved); a speed that rounds to zero at one
/// decimal snaps to the exact zero vector so resting agents don't drift.
pub fn integrate(state: &mut AgentState, steering: SteeringOutput, dt: f32) {
    let mut steering = steering;
    steering.limit(
        state.limits.max_acceleration,
        state.limits.max_angular_acceleration,
    );

    state.position += state.velocity * dt;
    state.orientation = angle::wrap_degrees(state.orientation + state.angular_velocity * dt);

    state.velocity += steering.linear * dt;
    state.angular_velocity += steering.angular * dt;

    let speed = state.velocity.length();
    if speed > state.limits.max_speed {
        state.velocity *= state.limits.max_speed / speed;
    }
    if (speed * 10.0).round() == 0.0 {
        state.velocity = Vec2::ZERO;
    }

    state.angular_velocity = state
        .angular_velocity
        .clamp(-state.limits.max_rotation, state.limits.max_rotation);
}

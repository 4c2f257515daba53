//! Align, face, and look-where-you're-going: rotation-only behaviors.

use steer_core::{AgentState, SteeringOutput, Vec2, angle};

use crate::params::AlignParams;

/// Rotate toward `target_orientation` (degrees, `[0, 360)`), taking the
/// shorter arc.
///
/// Within `target_radius` the agent counts as aligned and the output cancels
/// its angular velocity.  Within `slowdown_radius` the turn rate ramps down
/// with `size / (slowdown_radius + target_radius)` — the denominator adds the
/// stop radius on purpose, so the ramp reaches zero only once *inside* the
/// stop radius, not exactly at its boundary.
pub(crate) fn align(
    agent: &AgentState,
    params: &AlignParams,
    target_orientation: f32,
) -> SteeringOutput {
    let rotation = angle::shortest_rotation(agent.orientation, target_orientation);
    let size = rotation.abs();

    if size < params.target_radius {
        return SteeringOutput::new(Vec2::ZERO, -agent.angular_velocity);
    }

    let mut target_rotation = if size < params.slowdown_radius {
        agent.limits.max_rotation * (size / (params.slowdown_radius + params.target_radius))
    } else {
        agent.limits.max_rotation
    };

    // Apply the chosen direction's sign.
    target_rotation *= rotation / size;

    SteeringOutput::new(Vec2::ZERO, target_rotation / params.time_to_target)
}

/// Rotate to face `target_position`: derive the bearing from here to there,
/// then align to it.
pub(crate) fn face(
    agent: &AgentState,
    params: &AlignParams,
    target_position: Vec2,
) -> SteeringOutput {
    align(
        agent,
        params,
        angle::bearing_degrees(agent.position, target_position),
    )
}

/// Rotate to face the direction of travel.  At rest there is no direction to
/// face, so the output is zero.
pub(crate) fn look_where_youre_going(agent: &AgentState, params: &AlignParams) -> SteeringOutput {
    if agent.velocity == Vec2::ZERO {
        return SteeringOutput::ZERO;
    }
    align(agent, params, angle::vector_bearing(agent.velocity))
}

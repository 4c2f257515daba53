//! Seek and flee: accelerate toward / away from a point.

use steer_core::{AgentState, SteeringOutput};

use crate::params::{FleeParams, SeekParams};

/// Accelerate toward `target_position`, ramping the desired speed down
/// inside `slow_down_radius` and cancelling all velocity inside
/// `target_radius`.
///
/// The output is an acceleration derived from a velocity delta
/// (`Δv / time_to_target`), which is what makes arrival feel inertial rather
/// than snapping.  The result is clamped to the agent's max acceleration —
/// except the arrived-stop case, which returns the full cancellation
/// unclamped so the stop is exact.
pub(crate) fn seek(
    agent: &AgentState,
    params: &SeekParams,
    target_position: steer_core::Vec2,
) -> SteeringOutput {
    let direction = target_position - agent.position;
    let distance = direction.length();

    // Inside the stopping radius: cancel whatever velocity remains.
    if distance < params.target_radius {
        return SteeringOutput::new(-agent.velocity, 0.0);
    }

    let target_speed = if distance < params.slow_down_radius {
        // Linear ramp measured from the edge of the stop radius, so the ramp
        // bottoms out at the stop boundary rather than at distance zero.
        distance / (params.slow_down_radius - params.target_radius) * agent.limits.max_speed
    } else {
        agent.limits.max_speed
    };

    let target_velocity = direction.normalize_or_zero() * target_speed;

    let mut output = SteeringOutput::new(
        (target_velocity - agent.velocity) / params.time_to_target,
        0.0,
    );
    output.limit_linear(agent.limits.max_acceleration);
    output
}

/// Accelerate away from `target_position`.
///
/// Outside `detection_radius` the desired velocity is zero (stop reacting);
/// in the outer 10% of the radius it ramps down linearly so the reaction
/// fades instead of cutting off.
pub(crate) fn flee(
    agent: &AgentState,
    params: &FleeParams,
    target_position: steer_core::Vec2,
) -> SteeringOutput {
    let direction = agent.position - target_position;
    let distance = direction.length();

    let target_velocity = if distance > params.detection_radius {
        steer_core::Vec2::ZERO
    } else if distance / params.detection_radius >= 0.9 {
        // The band quotient lands in [0, 0.1]; ×10 stretches it to [0, 1]
        // and the flip puts zero at the outermost edge.
        let slowdown = 1.0 - (distance / params.detection_radius - 0.9) * 10.0;
        direction.normalize_or_zero() * agent.limits.max_speed * slowdown
    } else {
        direction.normalize_or_zero() * agent.limits.max_speed
    };

    SteeringOutput::new(
        (target_velocity - agent.velocity) / params.time_to_target,
        0.0,
    )
}

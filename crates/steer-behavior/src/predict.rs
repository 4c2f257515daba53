//! Pursue, evade, and velocity-match: behaviors that estimate the target's
//! velocity from two position samples.
//!
//! All three share the first-tick rule: with no previous sample recorded in
//! the slot's scratch there is nothing to estimate, so the behavior records
//! the sample and returns a zero output.  The scratch field is an explicit
//! `Option` — "no observation yet" is a state, not a magic position value.

use steer_core::{AgentState, SteeringOutput, Vec2};

use crate::params::{EvadeParams, PursueParams, VelocityMatchParams};
use crate::scratch::BehaviorScratch;
use crate::seek;

/// Seconds of target extrapolation: how long the agent would need to cover
/// `distance` at its current speed, saturated at `max_prediction` when the
/// agent is too slow (or stationary) for that quotient to stay bounded.
pub(crate) fn prediction_horizon(distance: f32, agent_speed: f32, max_prediction: f32) -> f32 {
    if agent_speed * max_prediction <= distance {
        max_prediction
    } else {
        distance / agent_speed
    }
}

/// Take this tick's target sample, returning the estimated target velocity
/// if a previous sample existed.
fn sample_target_velocity(
    scratch: &mut BehaviorScratch,
    target_position: Vec2,
    dt: f32,
) -> Option<Vec2> {
    let estimate = scratch
        .last_target_position
        .map(|last| (target_position - last) / dt);
    scratch.last_target_position = Some(target_position);
    estimate
}

/// Seek the target's predicted future position.
pub(crate) fn pursue(
    agent: &AgentState,
    params: &PursueParams,
    target_position: Vec2,
    scratch: &mut BehaviorScratch,
    dt: f32,
) -> SteeringOutput {
    let Some(target_velocity) = sample_target_velocity(scratch, target_position, dt) else {
        return SteeringOutput::ZERO;
    };

    let distance = (target_position - agent.position).length();
    let horizon = prediction_horizon(distance, agent.speed(), params.prediction.max_prediction);

    seek::seek(
        agent,
        &params.seek,
        target_position + target_velocity * horizon,
    )
}

/// Accelerate directly away from the target's predicted future position.
///
/// Active only within `detection_radius`; unlike flee there is no fade band —
/// evasion is all-or-nothing.
pub(crate) fn evade(
    agent: &AgentState,
    params: &EvadeParams,
    target_position: Vec2,
    scratch: &mut BehaviorScratch,
    dt: f32,
) -> SteeringOutput {
    let Some(target_velocity) = sample_target_velocity(scratch, target_position, dt) else {
        return SteeringOutput::ZERO;
    };

    let distance = (target_position - agent.position).length();
    let horizon = prediction_horizon(distance, agent.speed(), params.prediction.max_prediction);

    let evade_direction = agent.position - (target_position + target_velocity * horizon);

    let desired_velocity = if distance > params.flee.detection_radius {
        Vec2::ZERO
    } else {
        evade_direction.normalize_or_zero() * agent.limits.max_speed
    };

    SteeringOutput::new(
        (desired_velocity - agent.velocity) / params.flee.time_to_target,
        0.0,
    )
}

/// Match the target's estimated velocity.
pub(crate) fn velocity_match(
    agent: &AgentState,
    params: &VelocityMatchParams,
    target_position: Vec2,
    scratch: &mut BehaviorScratch,
    dt: f32,
) -> SteeringOutput {
    let Some(target_velocity) = sample_target_velocity(scratch, target_position, dt) else {
        return SteeringOutput::ZERO;
    };

    SteeringOutput::new(
        (target_velocity - agent.velocity) / params.time_to_target,
        0.0,
    )
}

//! Wander: a bounded-turn random walk.

use steer_core::{AgentRng, AgentState, SteeringOutput, angle};

use crate::align;
use crate::params::WanderParams;
use crate::scratch::BehaviorScratch;

/// Drift the slot's heading offset by a uniform draw in
/// `[-wander_rate, +wander_rate]` and face the resulting point on the wander
/// circle; linear output is always full acceleration straight ahead — wander
/// never decelerates.
///
/// The offset accumulates tick over tick (a random walk), which is what
/// produces smooth meandering instead of per-tick heading jitter.
pub(crate) fn wander(
    agent: &AgentState,
    params: &WanderParams,
    scratch: &mut BehaviorScratch,
    rng: &mut AgentRng,
) -> SteeringOutput {
    scratch.wander_angle += rng.gen_range(-params.wander_rate..=params.wander_rate);

    let forward = agent.forward();
    let circle_center = agent.position + forward * params.wander_offset;
    let aim = circle_center
        + angle::rotate_degrees(forward, scratch.wander_angle) * params.wander_radius;

    let mut output = align::face(agent, &params.align, aim);
    output.linear = forward * agent.limits.max_acceleration;
    output
}

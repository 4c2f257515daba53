//! Separation: distance-weighted repulsion from nearby colliders.

use steer_core::{AgentId, AgentState, SteeringOutput, Vec2};

use crate::params::SeparateParams;
use crate::query::NeighborQuery;

/// Accumulate a repulsion of `min(max_acceleration, decay · d²)` away from
/// every neighbor within `target_radius` on the configured layers.
///
/// Contributions sum without normalization — several close neighbors push
/// harder than one.  Entries matching `self_id` are skipped.  No angular
/// effect.
pub(crate) fn separate(
    agent: &AgentState,
    params: &SeparateParams,
    self_id: AgentId,
    neighbors: &dyn NeighborQuery,
) -> SteeringOutput {
    let mut linear = Vec2::ZERO;

    for neighbor in neighbors.neighbors_within(agent.position, params.target_radius, params.layers)
    {
        if neighbor.id == self_id {
            continue;
        }

        let away = agent.position - neighbor.position;
        let distance = away.length();
        let strength =
            (params.decay_coefficient * distance * distance).min(agent.limits.max_acceleration);

        linear += away.normalize_or_zero() * strength;
    }

    SteeringOutput::new(linear, 0.0)
}

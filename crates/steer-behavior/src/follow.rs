//! Follow-path: four ways to traverse an authored station sequence.

use steer_core::{AgentState, SteeringOutput};
use steer_path::Path;

use crate::BehaviorResult;
use crate::params::{FollowMode, FollowPathParams};
use crate::scratch::BehaviorScratch;
use crate::seek;

/// Traverse `path` according to `params.mode`, seeking a station or a
/// percent-parameterized point ahead on the path.
///
/// The slot's `current_station` scratch drives the station modes; percent
/// modes are stateless.  Path index errors propagate — a stale station index
/// after the host rebuilt the path is a misconfiguration, not something to
/// clamp over.
pub(crate) fn follow_path(
    agent: &AgentState,
    params: &FollowPathParams,
    path: &Path,
    scratch: &mut BehaviorScratch,
) -> BehaviorResult<SteeringOutput> {
    match params.mode {
        FollowMode::Station => {
            let current = scratch.current_station;
            let next = path.next_station_index(current)?;

            // Advance when the next station's incoming segment has become the
            // closer one (the agent drifted past), or when the current
            // station is reached outright.
            let passed = path.distance_to_segment(current, agent.position)?
                > path.distance_to_segment(next, agent.position)?;
            let reached = agent.position.distance(path.station_position(current)?)
                <= params.seek.target_radius;
            if passed || reached {
                scratch.current_station = next;
            }

            Ok(seek::seek(
                agent,
                &params.seek,
                path.station_position(scratch.current_station)?,
            ))
        }

        FollowMode::AlwaysReachStation => {
            let current = scratch.current_station;
            let reached = agent.position.distance(path.station_position(current)?)
                <= params.seek.target_radius;
            if reached {
                scratch.current_station = path.next_station_index(current)?;
            }

            Ok(seek::seek(
                agent,
                &params.seek,
                path.station_position(scratch.current_station)?,
            ))
        }

        FollowMode::Path => {
            let percent = path.closest_point_percent(agent.position)?;
            let target = path.point_at_percent(percent + params.follow_ahead_percent)?;
            Ok(seek::seek(agent, &params.seek, target))
        }

        FollowMode::PredictivePath => {
            // Project from where the agent is about to be, not where it is —
            // at speed this cancels the look-ahead lag of plain Path mode.
            let probe = agent.position + agent.velocity * params.predict_time;
            let percent = path.closest_point_percent(probe)?;
            let target = path.point_at_percent(percent + params.follow_ahead_percent)?;
            Ok(seek::seek(agent, &params.seek, target))
        }
    }
}

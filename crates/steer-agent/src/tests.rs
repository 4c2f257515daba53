//! Unit tests for steer-agent.

use steer_behavior::{
    AlignParams, FollowPathParams, NoNeighbors, SeekParams, SteeringBehavior, Target,
    WanderParams,
};
use steer_core::{
    AgentId, AgentRng, AgentState, KinematicLimits, PathId, SteeringOutput, Vec2,
};
use steer_path::Path;

use crate::{
    AgentError, BehaviorSet, BehaviorSlot, BlendMode, SteeringAgent, TargetRef, TickContext,
    integrate,
};

const EPS: f32 = 1e-3;

static NO_NEIGHBORS: NoNeighbors = NoNeighbors;
static NO_PATHS: [Path; 0] = [];

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ctx<'a>(paths: &'a [Path]) -> TickContext<'a> {
    TickContext {
        dt: 0.02,
        self_id: AgentId(0),
        paths,
        neighbors: &NO_NEIGHBORS,
    }
}

fn no_agents(_: AgentId) -> Option<Target> {
    None
}

fn rng() -> AgentRng {
    AgentRng::new(42, AgentId(0))
}

fn seek_slot(target: Vec2) -> BehaviorSlot {
    BehaviorSlot::new(SteeringBehavior::Seek(SeekParams::default()))
        .with_target(TargetRef::Point(target))
}

fn face_slot(target: Vec2) -> BehaviorSlot {
    BehaviorSlot::new(SteeringBehavior::Face(AlignParams::default()))
        .with_target(TargetRef::Point(target))
}

// ── Weight normalization ──────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use super::*;

    #[test]
    fn velocity_weights_normalize_over_velocity_capable_slots() {
        let mut set = BehaviorSet::weighted([
            seek_slot(Vec2::new(100.0, 0.0)).with_weights(0.5, 1.0).unwrap(),
            seek_slot(Vec2::new(-100.0, 0.0)).with_weights(0.3, 1.0).unwrap(),
            face_slot(Vec2::new(0.0, 100.0)).with_weights(1.0, 0.8).unwrap(),
        ]);
        set.normalize_weights().unwrap();

        let slots = set.slots();
        // Velocity channel: 0.5 and 0.3 over a 0.8 sum; the rotation-only
        // face slot is excluded from that sum entirely.
        assert!((slots[0].velocity_weight - 0.625).abs() < EPS);
        assert!((slots[1].velocity_weight - 0.375).abs() < EPS);
        // Rotation channel: the face slot is alone → exactly 1.
        assert!((slots[2].rotation_weight - 1.0).abs() < EPS);

        let velocity_sum: f32 = slots
            .iter()
            .filter(|s| s.behavior.capabilities().affects_velocity)
            .map(|s| s.velocity_weight)
            .sum();
        assert!((velocity_sum - 1.0).abs() < EPS);
    }

    #[test]
    fn wander_participates_in_both_channels() {
        let mut set = BehaviorSet::weighted([
            BehaviorSlot::new(SteeringBehavior::Wander(WanderParams::default()))
                .with_weights(0.5, 0.5)
                .unwrap(),
            seek_slot(Vec2::new(100.0, 0.0)).with_weights(0.5, 1.0).unwrap(),
            face_slot(Vec2::new(0.0, 100.0)).with_weights(1.0, 0.5).unwrap(),
        ]);
        set.normalize_weights().unwrap();

        let slots = set.slots();
        assert!((slots[0].velocity_weight - 0.5).abs() < EPS);
        assert!((slots[0].rotation_weight - 0.5).abs() < EPS);
        assert!((slots[1].velocity_weight - 0.5).abs() < EPS);
        assert!((slots[2].rotation_weight - 0.5).abs() < EPS);
    }

    #[test]
    fn out_of_range_weights_are_rejected() {
        assert!(matches!(
            seek_slot(Vec2::ZERO).with_weights(0.0, 1.0),
            Err(AgentError::InvalidWeight(_))
        ));
        assert!(seek_slot(Vec2::ZERO).with_weights(1.5, 1.0).is_err());

        // Weights mutated out of range after construction are caught at
        // normalization time.
        let mut set = BehaviorSet::weighted([seek_slot(Vec2::ZERO)]);
        set.slots_mut()[0].velocity_weight = -1.0;
        assert!(matches!(
            set.normalize_weights(),
            Err(AgentError::InvalidWeight(_))
        ));
    }

    #[test]
    fn empty_set_is_an_error() {
        let mut set = BehaviorSet::new(BlendMode::Weighted);
        assert!(matches!(set.normalize_weights(), Err(AgentError::NoSlots)));
    }

    #[test]
    fn adding_a_slot_renormalizes_on_next_use() {
        let mut agent = AgentState::at(Vec2::ZERO);
        agent.limits = KinematicLimits::default();
        let mut set = BehaviorSet::weighted([seek_slot(Vec2::new(100.0, 0.0))]);

        set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        assert!((set.slots()[0].velocity_weight - 1.0).abs() < EPS);

        set.push_slot(seek_slot(Vec2::new(-100.0, 0.0)));
        set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        assert!((set.slots()[0].velocity_weight - 0.5).abs() < EPS);
        assert!((set.slots()[1].velocity_weight - 0.5).abs() < EPS);
    }
}

// ── Blending ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod blending {
    use super::*;

    #[test]
    fn single_mode_returns_the_raw_output() {
        let mut set = BehaviorSet::single(seek_slot(Vec2::new(100.0, 0.0)));
        let agent = AgentState::at(Vec2::ZERO);
        let out = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        // Far target at max speed over time_to_target, clamped to 20.
        assert!(out.linear.abs_diff_eq(Vec2::new(20.0, 0.0), EPS));
        assert!((set.slots()[0].velocity_weight - 1.0).abs() < EPS);
    }

    #[test]
    fn opposing_equal_seeks_cancel() {
        let mut set = BehaviorSet::weighted([
            seek_slot(Vec2::new(100.0, 0.0)),
            seek_slot(Vec2::new(-100.0, 0.0)),
        ]);
        let agent = AgentState::at(Vec2::ZERO);
        let out = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        assert!(out.linear.length() < EPS);
    }

    #[test]
    fn channels_stay_separated_by_capability() {
        let mut set = BehaviorSet::weighted([
            seek_slot(Vec2::new(100.0, 0.0)),
            face_slot(Vec2::new(-100.0, 0.0)),
        ]);
        let agent = AgentState::at(Vec2::ZERO);
        let out = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        // Seek drives the full linear channel, face the full angular one.
        assert!(out.linear.abs_diff_eq(Vec2::new(20.0, 0.0), EPS));
        assert!(out.angular > 0.0);
    }

    #[test]
    fn channel_without_capable_slots_contributes_zero() {
        let mut set = BehaviorSet::weighted([seek_slot(Vec2::new(100.0, 0.0))]);
        let agent = AgentState::at(Vec2::ZERO);
        let out = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        assert_eq!(out.angular, 0.0);
    }

    #[test]
    fn unresolvable_agent_target_fails_fast() {
        let mut set = BehaviorSet::single(
            BehaviorSlot::new(SteeringBehavior::Seek(SeekParams::default()))
                .with_target(TargetRef::Agent(AgentId(9))),
        );
        let agent = AgentState::at(Vec2::ZERO);
        let result = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents);
        assert!(matches!(
            result,
            Err(AgentError::TargetAgentNotFound(AgentId(9)))
        ));
    }

    #[test]
    fn unknown_path_id_fails_fast() {
        let mut set = BehaviorSet::single(
            BehaviorSlot::new(SteeringBehavior::FollowPath(FollowPathParams::default()))
                .with_path(PathId(5)),
        );
        let agent = AgentState::at(Vec2::ZERO);
        let result = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents);
        assert!(matches!(result, Err(AgentError::PathNotFound(PathId(5)))));
    }

    #[test]
    fn pose_targets_resolve_without_a_resolver() {
        let mut set = BehaviorSet::single(
            BehaviorSlot::new(SteeringBehavior::Align(AlignParams::default())).with_target(
                TargetRef::Pose {
                    position: Vec2::ZERO,
                    orientation: 90.0,
                },
            ),
        );
        let agent = AgentState::at(Vec2::ZERO);
        let out = set.steer(&agent, &ctx(&NO_PATHS), &mut rng(), no_agents).unwrap();
        assert!(out.angular > 0.0);
    }
}

// ── Integration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use super::*;

    #[test]
    fn displacement_uses_pre_update_velocity() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.velocity = Vec2::new(3.0, 0.0);
        integrate(&mut state, SteeringOutput::new(Vec2::new(10.0, 0.0), 0.0), 0.1);
        // Position moved by the old velocity; the new velocity shows up in
        // displacement only next tick.
        assert!(state.position.abs_diff_eq(Vec2::new(0.3, 0.0), EPS));
        assert!(state.velocity.abs_diff_eq(Vec2::new(4.0, 0.0), EPS));
    }

    #[test]
    fn acceleration_is_clamped_before_integration() {
        let mut state = AgentState::at(Vec2::ZERO);
        integrate(&mut state, SteeringOutput::new(Vec2::new(1000.0, 0.0), 0.0), 1.0);
        // Clamped to max_acceleration 20 for one second, then to max_speed 10.
        assert!(state.velocity.abs_diff_eq(Vec2::new(10.0, 0.0), EPS));
    }

    #[test]
    fn speed_clamp_preserves_direction() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.velocity = Vec2::new(6.0, 8.0);
        integrate(&mut state, SteeringOutput::new(Vec2::new(12.0, 16.0), 0.0), 1.0);
        assert!((state.speed() - 10.0).abs() < EPS);
        assert!(state.velocity.normalize().abs_diff_eq(Vec2::new(0.6, 0.8), EPS));
    }

    #[test]
    fn angular_clamp_preserves_sign() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.angular_velocity = -19.0;
        integrate(&mut state, SteeringOutput::new(Vec2::ZERO, -30.0), 1.0);
        assert!((state.angular_velocity - -20.0).abs() < EPS);

        state.angular_velocity = 19.0;
        integrate(&mut state, SteeringOutput::new(Vec2::ZERO, 30.0), 1.0);
        assert!((state.angular_velocity - 20.0).abs() < EPS);
    }

    #[test]
    fn near_zero_speed_snaps_to_exact_zero() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.velocity = Vec2::new(0.04, 0.0);
        integrate(&mut state, SteeringOutput::ZERO, 0.02);
        assert_eq!(state.velocity, Vec2::ZERO);
    }

    #[test]
    fn moderate_speeds_do_not_snap() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.velocity = Vec2::new(0.2, 0.0);
        integrate(&mut state, SteeringOutput::ZERO, 0.02);
        assert!(state.velocity.x > 0.0);
    }

    #[test]
    fn orientation_wraps_after_integration() {
        let mut state = AgentState::at(Vec2::ZERO);
        state.orientation = 350.0;
        state.angular_velocity = 20.0;
        integrate(&mut state, SteeringOutput::ZERO, 1.0);
        assert!((state.orientation - 10.0).abs() < EPS);
    }

    #[test]
    fn post_tick_invariants_hold_for_arbitrary_outputs() {
        let mut state = AgentState::at(Vec2::ZERO);
        for i in 0..100 {
            let wild = SteeringOutput::new(
                Vec2::new((i * 37 % 100) as f32 - 50.0, (i * 61 % 90) as f32 - 45.0) * 10.0,
                ((i * 13 % 200) as f32 - 100.0) * 5.0,
            );
            integrate(&mut state, wild, 0.02);
            assert!(state.speed() <= state.limits.max_speed + EPS);
            assert!(state.angular_velocity.abs() <= state.limits.max_rotation + EPS);
            assert!((0.0..360.0).contains(&state.orientation));
        }
    }
}

// ── SteeringAgent ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn tick_steers_and_integrates() {
        let set = BehaviorSet::single(seek_slot(Vec2::new(100.0, 0.0)));
        let mut agent = SteeringAgent::new(AgentId(0), Vec2::ZERO, set, 42);

        agent.tick(&ctx(&NO_PATHS), no_agents).unwrap();
        // First tick: acceleration 20 for 0.02 s → velocity 0.4 +x; the
        // displacement lags one tick behind.
        assert!(agent.state.velocity.abs_diff_eq(Vec2::new(0.4, 0.0), EPS));
        assert_eq!(agent.state.position, Vec2::ZERO);

        agent.tick(&ctx(&NO_PATHS), no_agents).unwrap();
        assert!(agent.state.position.x > 0.0);
    }

    #[test]
    fn follow_path_agent_moves_along_registered_path() {
        let paths = [Path::from_points(
            [Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0)],
            false,
        )];
        let slot = BehaviorSlot::new(SteeringBehavior::FollowPath(FollowPathParams::default()))
            .with_path(PathId(0));
        let mut agent =
            SteeringAgent::new(AgentId(0), Vec2::new(1.5, 0.0), BehaviorSet::single(slot), 42);

        for _ in 0..50 {
            agent.tick(&ctx(&paths), no_agents).unwrap();
        }
        // Headed down the line, limits respected.
        assert!(agent.state.position.x > 1.5);
        assert!(agent.state.speed() <= agent.state.limits.max_speed + EPS);
    }
}

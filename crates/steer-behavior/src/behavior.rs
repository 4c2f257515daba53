//! The closed set of steering behaviors and their dispatch.

use steer_core::{AgentRng, AgentState, SteeringOutput};

use crate::inputs::SteerInputs;
use crate::params::{
    AlignParams, EvadeParams, FleeParams, FollowPathParams, PursueParams, SeekParams,
    SeparateParams, VelocityMatchParams, WanderParams,
};
use crate::scratch::BehaviorScratch;
use crate::{BehaviorResult, align, follow, predict, seek, separate, wander};

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Which output channels a behavior can drive.
///
/// The blender uses this to decide which slots participate in each weight
/// category: a rotation-only behavior never dilutes the velocity weights and
/// vice versa.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub affects_velocity: bool,
    pub affects_rotation: bool,
}

impl Capabilities {
    pub const VELOCITY: Capabilities = Capabilities {
        affects_velocity: true,
        affects_rotation: false,
    };
    pub const ROTATION: Capabilities = Capabilities {
        affects_velocity: false,
        affects_rotation: true,
    };
    pub const BOTH: Capabilities = Capabilities {
        affects_velocity: true,
        affects_rotation: true,
    };
}

// ── SteeringBehavior ──────────────────────────────────────────────────────────

/// One steering behavior with its parameters.
///
/// A closed tagged set rather than a trait object: the capability descriptor
/// is a static property of the variant, dispatch is a `match`, and hosts can
/// serialize a whole behavior configuration as data (`serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringBehavior {
    /// Accelerate toward the target, slowing into it.
    Seek(SeekParams),
    /// Accelerate away from the target while it is within detection range.
    Flee(FleeParams),
    /// Rotate to the target's orientation.
    Align(AlignParams),
    /// Rotate to face the target's position.
    Face(AlignParams),
    /// Rotate to face the direction of travel.
    LookWhereYoureGoing(AlignParams),
    /// Seek the target's predicted future position.
    Pursue(PursueParams),
    /// Flee the target's predicted future position.
    Evade(EvadeParams),
    /// Match the target's estimated velocity.
    VelocityMatch(VelocityMatchParams),
    /// Meander via a bounded-turn random walk.
    Wander(WanderParams),
    /// Push away from nearby colliders.
    Separate(SeparateParams),
    /// Traverse the slot's path.
    FollowPath(FollowPathParams),
}

impl SteeringBehavior {
    /// Which output channels this variant drives.
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            SteeringBehavior::Seek(_)
            | SteeringBehavior::Flee(_)
            | SteeringBehavior::Pursue(_)
            | SteeringBehavior::Evade(_)
            | SteeringBehavior::VelocityMatch(_)
            | SteeringBehavior::Separate(_)
            | SteeringBehavior::FollowPath(_) => Capabilities::VELOCITY,

            SteeringBehavior::Align(_)
            | SteeringBehavior::Face(_)
            | SteeringBehavior::LookWhereYoureGoing(_) => Capabilities::ROTATION,

            SteeringBehavior::Wander(_) => Capabilities::BOTH,
        }
    }

    /// Evaluate this behavior for one tick.
    ///
    /// Pure apart from `scratch` (the slot's own state) and `rng` (the
    /// owning agent's deterministic stream, used only by wander).
    pub fn steer(
        &self,
        agent: &AgentState,
        inputs: &SteerInputs<'_>,
        scratch: &mut BehaviorScratch,
        rng: &mut AgentRng,
    ) -> BehaviorResult<SteeringOutput> {
        match self {
            SteeringBehavior::Seek(params) => {
                Ok(seek::seek(agent, params, inputs.require_target()?.position))
            }
            SteeringBehavior::Flee(params) => {
                Ok(seek::flee(agent, params, inputs.require_target()?.position))
            }
            SteeringBehavior::Align(params) => Ok(align::align(
                agent,
                params,
                inputs.require_target()?.orientation,
            )),
            SteeringBehavior::Face(params) => Ok(align::face(
                agent,
                params,
                inputs.require_target()?.position,
            )),
            SteeringBehavior::LookWhereYoureGoing(params) => {
                Ok(align::look_where_youre_going(agent, params))
            }
            SteeringBehavior::Pursue(params) => Ok(predict::pursue(
                agent,
                params,
                inputs.require_target()?.position,
                scratch,
                inputs.dt,
            )),
            SteeringBehavior::Evade(params) => Ok(predict::evade(
                agent,
                params,
                inputs.require_target()?.position,
                scratch,
                inputs.dt,
            )),
            SteeringBehavior::VelocityMatch(params) => Ok(predict::velocity_match(
                agent,
                params,
                inputs.require_target()?.position,
                scratch,
                inputs.dt,
            )),
            SteeringBehavior::Wander(params) => Ok(wander::wander(agent, params, scratch, rng)),
            SteeringBehavior::Separate(params) => Ok(separate::separate(
                agent,
                params,
                inputs.self_id,
                inputs.neighbors,
            )),
            SteeringBehavior::FollowPath(params) => {
                follow::follow_path(agent, params, inputs.require_path()?, scratch)
            }
        }
    }
}

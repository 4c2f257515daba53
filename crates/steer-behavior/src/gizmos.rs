//! Debug-shape export for visualizers.
//!
//! The core exposes the radii and construction points a drawing layer would
//! render, as plain data; nothing here depends on them being consumed.

use steer_core::{AgentState, Vec2, angle};

use crate::behavior::SteeringBehavior;

/// A shape a visualizer may draw for one behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebugShape {
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
}

/// Length of the heading rays drawn for angular radii.
const RAY_LENGTH: f32 = 2.0;

impl SteeringBehavior {
    /// The shapes describing this behavior's tuning around `agent`.
    pub fn debug_shapes(&self, agent: &AgentState) -> Vec<DebugShape> {
        let at = agent.position;
        match self {
            SteeringBehavior::Seek(p) | SteeringBehavior::FollowPath(crate::FollowPathParams { seek: p, .. }) => vec![
                DebugShape::Circle { center: at, radius: p.slow_down_radius },
                DebugShape::Circle { center: at, radius: p.target_radius },
            ],
            SteeringBehavior::Pursue(p) => vec![
                DebugShape::Circle { center: at, radius: p.seek.slow_down_radius },
                DebugShape::Circle { center: at, radius: p.seek.target_radius },
            ],
            SteeringBehavior::Flee(p) => vec![
                DebugShape::Circle { center: at, radius: p.detection_radius },
            ],
            SteeringBehavior::Evade(p) => vec![
                DebugShape::Circle { center: at, radius: p.flee.detection_radius },
            ],
            SteeringBehavior::Align(p)
            | SteeringBehavior::Face(p)
            | SteeringBehavior::LookWhereYoureGoing(p) => angular_rays(agent, p.target_radius)
                .into_iter()
                .chain(angular_rays(agent, p.slowdown_radius))
                .collect(),
            SteeringBehavior::Wander(p) => {
                let center = at + agent.forward() * p.wander_offset;
                vec![
                    DebugShape::Line { from: at, to: center },
                    DebugShape::Circle { center, radius: p.wander_radius },
                ]
            }
            SteeringBehavior::Separate(p) => vec![
                DebugShape::Circle { center: at, radius: p.target_radius },
            ],
            SteeringBehavior::VelocityMatch(_) => Vec::new(),
        }
    }
}

/// Two rays fanned `half_angle` degrees either side of the agent's heading.
fn angular_rays(agent: &AgentState, half_angle: f32) -> [DebugShape; 2] {
    let at = agent.position;
    let forward = agent.forward() * RAY_LENGTH;
    [
        DebugShape::Line { from: at, to: at + angle::rotate_degrees(forward, half_angle) },
        DebugShape::Line { from: at, to: at + angle::rotate_degrees(forward, -half_angle) },
    ]
}

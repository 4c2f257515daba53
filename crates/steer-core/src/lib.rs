//! `steer-core` — foundational types for the `rust_steer` steering framework.
//!
//! This crate is a dependency of every other `steer-*` crate.  It
//! intentionally has no `steer-*` dependencies and minimal external ones
//! (only `glam` and `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`ids`]        | `AgentId`, `PathId`                                  |
//! | [`layer`]      | `LayerMask` bitmask for neighbor-query filtering     |
//! | [`angle`]      | Degree wrapping, bearings, shortest-rotation choice  |
//! | [`kinematics`] | `AgentState`, `KinematicLimits`                      |
//! | [`output`]     | `SteeringOutput` and its direction-preserving clamps |
//! | [`rng`]        | `AgentRng` (per-agent deterministic RNG)             |
//! | [`time`]       | `Tick`, `FixedClock`, `SimConfig`                    |
//!
//! # Conventions
//!
//! All angles are **degrees**.  Orientation 0 points along +Y ("up") and
//! increases counterclockwise; every stored orientation is wrapped to
//! `[0, 360)`.  Positions and velocities are `glam::Vec2`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod angle;
pub mod ids;
pub mod kinematics;
pub mod layer;
pub mod output;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use glam::Vec2;
pub use ids::{AgentId, PathId};
pub use kinematics::{AgentState, KinematicLimits};
pub use layer::LayerMask;
pub use output::SteeringOutput;
pub use rng::AgentRng;
pub use time::{FixedClock, SimConfig, Tick};

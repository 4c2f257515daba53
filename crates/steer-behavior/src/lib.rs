//! `steer-behavior` — the steering behaviors of the `rust_steer` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`behavior`]| `SteeringBehavior` enum, `Capabilities`, dispatch             |
//! | [`params`]  | Per-variant parameter structs with calibrated defaults        |
//! | [`scratch`] | `BehaviorScratch` — per-slot mutable evaluation state         |
//! | [`inputs`]  | `SteerInputs` — resolved per-slot view of one tick, `Target`  |
//! | [`query`]   | `NeighborQuery` seam + `Neighbor`, `NoNeighbors`              |
//! | [`gizmos`]  | `DebugShape` export for visualizers                           |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! Algorithm modules (`seek`, `align`, `predict`, `wander`, `separate`,
//! `follow`) are crate-private; everything is reached through
//! [`SteeringBehavior::steer`].
//!
//! # Evaluation model
//!
//! A behavior is a pure function of agent state, resolved inputs, and the
//! slot's own scratch state:
//!
//! ```rust,ignore
//! let out = behavior.steer(&agent, &inputs, &mut scratch, &mut rng)?;
//! ```
//!
//! Nothing here suspends, performs I/O, or touches shared mutable state —
//! scratch belongs to exactly one slot and `inputs` is a read-only snapshot,
//! so evaluations for different agents may run concurrently.
//!
//! Missing inputs are host contract violations and fail fast
//! (`MissingTarget` / `MissingPath`); the "no previous sample yet" state of
//! the prediction behaviors is *not* an error — it resolves locally to a
//! zero output while the first sample is recorded.

pub mod behavior;
pub mod error;
pub mod gizmos;
pub mod inputs;
pub mod params;
pub mod query;
pub mod scratch;

mod align;
mod follow;
mod predict;
mod seek;
mod separate;
mod wander;


pub use behavior::{Capabilities, SteeringBehavior};
pub use error::{BehaviorError, BehaviorResult};
pub use gizmos::DebugShape;
pub use inputs::{SteerInputs, Target};
pub use params::{
    AlignParams, EvadeParams, FleeParams, FollowMode, FollowPathParams, PursueParams, SeekParams,
    SeparateParams, VelocityMatchParams, WanderParams,
};
pub use query::{Neighbor, NeighborQuery, NoNeighbors};
pub use scratch::BehaviorScratch;

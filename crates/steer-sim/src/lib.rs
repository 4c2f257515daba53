//! `steer-sim` — fixed-timestep loop for steering many agents at once.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot — copy (id, position, orientation, layer) of every agent
//!                and bulk-load the R-tree neighbor index.  This is the
//!                tick's single consistent read view.
//!   ② Steer    — for every agent: resolve its slots' agent-target
//!                references against the snapshot, blend its behavior set,
//!                integrate the result.  Parallel with the `parallel`
//!                feature: each agent reads only the snapshot and mutates
//!                only itself.
//! ```
//!
//! Because all reads go through the phase-① snapshot, results do not depend
//! on agent iteration order — an agent steering relative to a neighbor sees
//! its tick-start pose whether that neighbor has already moved this tick or
//! not.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs the steer phase on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use steer_agent::{BehaviorSet, BehaviorSlot, TargetRef};
//! use steer_behavior::{SeekParams, SteeringBehavior};
//! use steer_core::{SimConfig, Vec2};
//! use steer_sim::{NoopObserver, SimBuilder};
//!
//! let mut builder = SimBuilder::new(SimConfig::new(500, 42));
//! let rabbit = builder.add_agent(Vec2::new(5.0, 5.0), wander_set());
//! builder.add_agent(Vec2::ZERO, pursue_set(rabbit));
//! let mut sim = builder.build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{AgentSnapshot, NeighborIndex};

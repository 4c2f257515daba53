//! Simulation observer trait for progress reporting and data collection.

use steer_agent::SteeringAgent;
use steer_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — position tracer
///
/// ```rust,ignore
/// struct Tracer;
///
/// impl SimObserver for Tracer {
///     fn on_tick_end(&mut self, tick: Tick, agents: &[SteeringAgent]) {
///         for a in agents {
///             println!("{tick} {} {:?}", a.id, a.state.position);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with read-only access to the full
    /// agent population, so recorders and visualizers can sample positions
    /// (and per-behavior debug shapes) without the sim knowing about any
    /// output format.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &[SteeringAgent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

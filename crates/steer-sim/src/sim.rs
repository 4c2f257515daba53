//! The `Sim` struct and its tick loop.

use steer_agent::{SteeringAgent, TickContext};
use steer_core::{FixedClock, SimConfig, Tick};
use steer_path::Path;

use crate::snapshot::{AgentSnapshot, NeighborIndex};
use crate::{SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the agent population, the path registry, and the clock, and drives
/// the two-phase tick loop (snapshot, then steer+integrate — see the crate
/// docs).  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (timestep, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: FixedClock,

    /// All agents, indexed by `AgentId`.
    pub agents: Vec<SteeringAgent>,

    /// Authored paths, indexed by `PathId`.
    pub paths: Vec<Path>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, &self.agents);

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, &self.agents);
            self.clock.advance();
        }
        Ok(())
    }

    /// The tick about to be processed (or one past the end after `run`).
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<()> {
        // ── Phase 1: snapshot ─────────────────────────────────────────────
        //
        // One consistent read view for the whole tick: neighbor queries and
        // agent-target resolution both see tick-start poses, so results do
        // not depend on agent evaluation order.
        let snapshots: Vec<AgentSnapshot> = self
            .agents
            .iter()
            .map(|a| AgentSnapshot {
                id: a.id,
                position: a.state.position,
                orientation: a.state.orientation,
                layer: a.layer,
            })
            .collect();
        let index = NeighborIndex::build(snapshots);

        // ── Phase 2: steer + integrate ────────────────────────────────────
        let dt = self.config.dt_secs;
        let paths: &[Path] = &self.paths;
        let index = &index;

        let step = |agent: &mut SteeringAgent| -> SimResult<()> {
            let ctx = TickContext {
                dt,
                self_id: agent.id,
                paths,
                neighbors: index,
            };
            agent
                .tick(&ctx, |id| index.resolve(id))
                .map_err(|source| SimError::Agent {
                    agent: agent.id,
                    source,
                })
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.agents.par_iter_mut().try_for_each(step)?;
        }
        #[cfg(not(feature = "parallel"))]
        {
            for agent in &mut self.agents {
                step(agent)?;
            }
        }

        Ok(())
    }
}

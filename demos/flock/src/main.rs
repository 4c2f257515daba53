//! flock — wandering agents kept apart by separation.
//!
//! A ring of agents meanders under per-agent deterministic wander while a
//! separation slot (queried against the per-tick R-tree snapshot) keeps the
//! cluster from collapsing.  The steer phase runs on Rayon via steer-sim's
//! `parallel` feature.

use anyhow::Result;

use steer_agent::{BehaviorSet, BehaviorSlot, SteeringAgent};
use steer_behavior::{SeparateParams, SteeringBehavior, WanderParams};
use steer_core::{LayerMask, SimConfig, Tick, Vec2};
use steer_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 24;
const SEED: u64 = 7;
const SIM_SECONDS: u64 = 20;
const TICKS_PER_SECOND: u64 = 50;
const FLOCK_LAYER: LayerMask = LayerMask::single(2);

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SpreadPrinter;

impl SimObserver for SpreadPrinter {
    fn on_tick_end(&mut self, tick: Tick, agents: &[SteeringAgent]) {
        if tick.0 % 100 != 0 {
            return;
        }
        let n = agents.len() as f32;
        let center = agents.iter().map(|a| a.state.position).sum::<Vec2>() / n;
        let spread = agents
            .iter()
            .map(|a| a.state.position.distance(center))
            .sum::<f32>()
            / n;
        println!("{tick}  center=({:6.2}, {:6.2})  mean spread={spread:5.2}", center.x, center.y);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn behavior_set() -> BehaviorSet {
    let wander = BehaviorSlot::new(SteeringBehavior::Wander(WanderParams::default()));
    let separate = BehaviorSlot::new(SteeringBehavior::Separate(SeparateParams {
        target_radius: 4.0,
        decay_coefficient: 50.0,
        layers: FLOCK_LAYER,
    }));
    BehaviorSet::weighted([wander, separate])
}

fn main() -> Result<()> {
    let mut builder = SimBuilder::new(SimConfig::new(SIM_SECONDS * TICKS_PER_SECOND, SEED));

    // Start on a tight ring so separation has work to do immediately.
    for i in 0..AGENT_COUNT {
        let theta = i as f32 / AGENT_COUNT as f32 * std::f32::consts::TAU;
        let position = Vec2::new(theta.cos(), theta.sin()) * 1.5;
        builder.add_agent_on_layer(position, behavior_set(), FLOCK_LAYER);
    }

    let mut sim = builder.build()?;
    sim.run(&mut SpreadPrinter)?;
    Ok(())
}

//! patrol — one agent lapping a circular route.
//!
//! A guard follows a square patrol circuit loaded from embedded CSV station
//! data, blending path following (velocity) with look-where-you're-going
//! (rotation).  Positions are printed twice a simulated second.

use std::io::Cursor;

use anyhow::Result;

use steer_agent::{BehaviorSet, BehaviorSlot, SteeringAgent};
use steer_behavior::{AlignParams, FollowMode, FollowPathParams, SteeringBehavior};
use steer_core::{SimConfig, Tick, Vec2};
use steer_path::load_path_reader;
use steer_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SIM_SECONDS: u64 = 30;
const TICKS_PER_SECOND: u64 = 50; // dt = 0.02 s
const PRINT_EVERY_TICKS: u64 = 25;

// Square patrol route, 20 units a side.
const ROUTE_CSV: &str = "\
x,y\n\
0.0,0.0\n\
20.0,0.0\n\
20.0,20.0\n\
0.0,20.0\n";

// ── Observer ──────────────────────────────────────────────────────────────────

struct PatrolPrinter;

impl SimObserver for PatrolPrinter {
    fn on_tick_end(&mut self, tick: Tick, agents: &[SteeringAgent]) {
        if tick.0 % PRINT_EVERY_TICKS != 0 {
            return;
        }
        let state = &agents[0].state;
        println!(
            "{tick}  pos=({:6.2}, {:6.2})  heading={:6.1}°  speed={:4.1}",
            state.position.x,
            state.position.y,
            state.orientation,
            state.speed(),
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("patrol finished at {final_tick}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let route = load_path_reader(Cursor::new(ROUTE_CSV), true)?;

    let mut builder = SimBuilder::new(SimConfig::new(SIM_SECONDS * TICKS_PER_SECOND, SEED));
    let circuit = builder.add_path(route);

    let follow = BehaviorSlot::new(SteeringBehavior::FollowPath(FollowPathParams::new(
        FollowMode::Path,
    )))
    .with_path(circuit)
    .with_weights(1.0, 1.0)?;
    let look = BehaviorSlot::new(SteeringBehavior::LookWhereYoureGoing(AlignParams::default()))
        .with_weights(1.0, 1.0)?;

    builder.add_agent(Vec2::new(2.0, -2.0), BehaviorSet::weighted([follow, look]));

    let mut sim = builder.build()?;
    sim.run(&mut PatrolPrinter)?;
    Ok(())
}

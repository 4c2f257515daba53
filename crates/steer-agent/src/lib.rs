//! `steer-agent` — behavior slots, blending, and integration for the
//! `rust_steer` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`slot`]      | `BehaviorSlot`, `TargetRef`                               |
//! | [`set`]       | `BehaviorSet` — blend mode, weight normalization, steering |
//! | [`context`]   | `TickContext` — per-tick read-only inputs                 |
//! | [`integrate`] | Kinematic integration of a blended output                 |
//! | [`agent`]     | `SteeringAgent` — state + behaviors + RNG, one tick entry |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                            |
//!
//! # The per-tick pipeline
//!
//! ```text
//! ① Resolve   — each slot's TargetRef and PathId become a concrete
//!               Target / &Path (agent references via the host's resolver).
//! ② Evaluate  — every slot's behavior produces a SteeringOutput against
//!               its own scratch state.
//! ③ Blend     — outputs are combined per the set's mode: a single slot
//!               evaluated alone, or a normalized weighted sum per channel.
//! ④ Integrate — the blended output is clamped to the agent's limits and
//!               applied to velocity/orientation/position.
//! ```
//!
//! Steps ① – ④ read nothing but the tick's snapshot and mutate nothing but
//! the agent itself, so whole-agent ticks are independent across agents.

pub mod agent;
pub mod context;
pub mod error;
pub mod integrate;
pub mod set;
pub mod slot;

#[cfg(test)]
mod tests;

pub use agent::SteeringAgent;
pub use context::TickContext;
pub use error::{AgentError, AgentResult};
pub use integrate::integrate;
pub use set::{BehaviorSet, BlendMode};
pub use slot::{BehaviorSlot, TargetRef};

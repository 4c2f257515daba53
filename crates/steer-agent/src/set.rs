//! The behavior set: blend mode, weight normalization, and steering.

use steer_behavior::{SteerInputs, Target};
use steer_core::{AgentId, AgentRng, AgentState, SteeringOutput};

use crate::context::TickContext;
use crate::slot::{BehaviorSlot, TargetRef};
use crate::{AgentError, AgentResult};

// ── BlendMode ─────────────────────────────────────────────────────────────────

/// How a set combines its slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// Exactly one slot, weights forced to 1, evaluated alone.
    #[default]
    Single,
    /// All slots evaluated; outputs combined as a normalized weighted sum
    /// per capability channel.
    Weighted,
}

// ── BehaviorSet ───────────────────────────────────────────────────────────────

/// An agent's behavior slots plus the blending that turns them into one
/// [`SteeringOutput`] per tick.
///
/// # Weight normalization
///
/// Before first use (and again after any slot change) each channel's weights
/// are divided by their sum *over the slots whose behavior can affect that
/// channel* — a rotation-only slot never dilutes the velocity weights.  A
/// channel no slot can affect simply contributes zero to the blend; it is
/// not an error and never a division.
#[derive(Clone, Debug, Default)]
pub struct BehaviorSet {
    pub mode: BlendMode,
    slots: Vec<BehaviorSlot>,
    normalized: bool,
}

impl BehaviorSet {
    pub fn new(mode: BlendMode) -> Self {
        Self {
            mode,
            slots: Vec::new(),
            normalized: false,
        }
    }

    /// Build a single-mode set around one slot.
    pub fn single(slot: BehaviorSlot) -> Self {
        let mut set = Self::new(BlendMode::Single);
        set.push_slot(slot);
        set
    }

    /// Build a weighted set from slots.
    pub fn weighted(slots: impl IntoIterator<Item = BehaviorSlot>) -> Self {
        let mut set = Self::new(BlendMode::Weighted);
        for slot in slots {
            set.push_slot(slot);
        }
        set
    }

    /// Append a slot.  Re-arms normalization.
    pub fn push_slot(&mut self, slot: BehaviorSlot) {
        self.slots.push(slot);
        self.normalized = false;
    }

    /// Remove slot `i`.  Re-arms normalization.
    pub fn remove_slot(&mut self, i: usize) -> BehaviorSlot {
        self.normalized = false;
        self.slots.remove(i)
    }

    pub fn slots(&self) -> &[BehaviorSlot] {
        &self.slots
    }

    /// Mutable slot access for reconfiguration.  Re-arms normalization,
    /// since weights may change under our feet.
    pub fn slots_mut(&mut self) -> &mut [BehaviorSlot] {
        self.normalized = false;
        &mut self.slots
    }

    // ── Normalization ─────────────────────────────────────────────────────

    /// Normalize blend weights per capability channel.
    ///
    /// Runs lazily from [`steer`][Self::steer]; callable directly when the
    /// host wants configuration errors at setup time instead of first tick.
    pub fn normalize_weights(&mut self) -> AgentResult<()> {
        if self.slots.is_empty() {
            return Err(AgentError::NoSlots);
        }

        match self.mode {
            BlendMode::Single => {
                self.slots[0].velocity_weight = 1.0;
                self.slots[0].rotation_weight = 1.0;
            }
            BlendMode::Weighted => {
                for slot in &self.slots {
                    for w in [slot.velocity_weight, slot.rotation_weight] {
                        if !(w > 0.0 && w <= 1.0) {
                            return Err(AgentError::InvalidWeight(w));
                        }
                    }
                }

                let velocity_sum: f32 = self
                    .slots
                    .iter()
                    .filter(|s| s.behavior.capabilities().affects_velocity)
                    .map(|s| s.velocity_weight)
                    .sum();
                let rotation_sum: f32 = self
                    .slots
                    .iter()
                    .filter(|s| s.behavior.capabilities().affects_rotation)
                    .map(|s| s.rotation_weight)
                    .sum();

                for slot in &mut self.slots {
                    let caps = slot.behavior.capabilities();
                    if caps.affects_velocity {
                        if velocity_sum <= 0.0 {
                            return Err(AgentError::DegenerateWeights("velocity"));
                        }
                        slot.velocity_weight /= velocity_sum;
                    }
                    if caps.affects_rotation {
                        if rotation_sum <= 0.0 {
                            return Err(AgentError::DegenerateWeights("rotation"));
                        }
                        slot.rotation_weight /= rotation_sum;
                    }
                }
            }
        }

        self.normalized = true;
        Ok(())
    }

    // ── Steering ──────────────────────────────────────────────────────────

    /// Produce this tick's blended output for `state`.
    ///
    /// `resolve_agent` turns [`TargetRef::Agent`] references into concrete
    /// poses — the sim crate passes its snapshot lookup, standalone hosts
    /// pass their own.  Returning `None` for a referenced agent is a
    /// configuration error and fails fast.
    pub fn steer<F>(
        &mut self,
        state: &AgentState,
        ctx: &TickContext<'_>,
        rng: &mut AgentRng,
        resolve_agent: F,
    ) -> AgentResult<SteeringOutput>
    where
        F: Fn(AgentId) -> Option<Target>,
    {
        if !self.normalized {
            self.normalize_weights()?;
        }

        match self.mode {
            BlendMode::Single => {
                let slot = self.slots.first_mut().ok_or(AgentError::NoSlots)?;
                evaluate_slot(slot, state, ctx, rng, &resolve_agent)
            }
            BlendMode::Weighted => {
                let mut combined = SteeringOutput::ZERO;
                for slot in &mut self.slots {
                    let caps = slot.behavior.capabilities();
                    let output = evaluate_slot(slot, state, ctx, rng, &resolve_agent)?;
                    if caps.affects_velocity {
                        combined.linear += output.linear * slot.velocity_weight;
                    }
                    if caps.affects_rotation {
                        combined.angular += output.angular * slot.rotation_weight;
                    }
                }
                Ok(combined)
            }
        }
    }
}

/// Resolve one slot's references and evaluate its behavior.
fn evaluate_slot<F>(
    slot: &mut BehaviorSlot,
    state: &AgentState,
    ctx: &TickContext<'_>,
    rng: &mut AgentRng,
    resolve_agent: &F,
) -> AgentResult<SteeringOutput>
where
    F: Fn(AgentId) -> Option<Target>,
{
    let target = match slot.target {
        None => None,
        Some(TargetRef::Point(position)) => Some(Target::point(position)),
        Some(TargetRef::Pose { position, orientation }) => {
            Some(Target::pose(position, orientation))
        }
        Some(TargetRef::Agent(id)) => {
            Some(resolve_agent(id).ok_or(AgentError::TargetAgentNotFound(id))?)
        }
    };

    let path = match slot.path {
        None => None,
        Some(id) => Some(
            ctx.paths
                .get(id.index())
                .ok_or(AgentError::PathNotFound(id))?,
        ),
    };

    let inputs = SteerInputs {
        dt: ctx.dt,
        self_id: ctx.self_id,
        target,
        path,
        neighbors: ctx.neighbors,
    };

    Ok(slot.behavior.steer(state, &inputs, &mut slot.scratch, rng)?)
}

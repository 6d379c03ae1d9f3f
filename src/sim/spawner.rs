//! Procedural gate generation

use rand::Rng;

use super::state::{Gate, GameState};
use crate::tuning::Tuning;

/// True on ticks that should spawn a gate (every `spawn_interval` Playing ticks)
#[inline]
pub fn should_spawn(play_ticks: u64, tuning: &Tuning) -> bool {
    play_ticks > 0 && play_ticks.is_multiple_of(tuning.spawn_interval)
}

/// Build a gate at the right edge with a uniformly random gap position
pub fn spawn_gate<R: Rng>(id: u32, rng: &mut R, tuning: &Tuning) -> Gate {
    let (min_top, max_top) = tuning.gap_top_range();
    // Non-finite bounds would make the sampler panic
    let gap_top = if min_top.is_finite() && max_top.is_finite() && max_top > min_top {
        rng.random_range(min_top..=max_top)
    } else {
        min_top
    };

    Gate {
        id,
        x: tuning.spawn_x(),
        width: tuning.gate_width,
        gap_top,
        gap_bottom: gap_top + tuning.gap_height,
        passed: false,
    }
}

/// Spawn into the field if this tick is on the cadence. Returns the new gate's id.
pub fn maybe_spawn(state: &mut GameState, tuning: &Tuning) -> Option<u32> {
    if !should_spawn(state.play_ticks, tuning) {
        return None;
    }
    let id = state.next_gate_id();
    let gate = spawn_gate(id, &mut state.rng, tuning);
    log::debug!(
        "Gate {} spawned: gap {:.1}..{:.1}",
        gate.id,
        gate.gap_top,
        gate.gap_bottom
    );
    state.gates.push(gate);
    Some(id)
}

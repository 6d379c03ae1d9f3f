//! Collision detection for the flyer
//!
//! Axis-aligned box tests only. Ceiling contact is handled by physics as a
//! clamp and never shows up here.

use super::state::{EndCause, Flyer, Gate};

/// Flyer is resting on or below the ground
#[inline]
pub fn hits_floor(flyer: &Flyer, floor_y: f32) -> bool {
    flyer.bottom() >= floor_y
}

/// Flyer overlaps the gate horizontally and is outside its gap vertically
pub fn hits_gate(flyer: &Flyer, gate: &Gate) -> bool {
    let overlaps_x = flyer.left() < gate.right() && flyer.right() > gate.x;
    if !overlaps_x {
        return false;
    }
    flyer.top() < gate.gap_top || flyer.bottom() > gate.gap_bottom
}

/// Run the full check: floor first, then gates oldest first.
///
/// Returns the first collision found.
pub fn detect(flyer: &Flyer, gates: &[Gate], floor_y: f32) -> Option<EndCause> {
    if hits_floor(flyer, floor_y) {
        return Some(EndCause::Floor);
    }
    gates
        .iter()
        .find(|gate| hits_gate(flyer, gate))
        .map(|gate| EndCause::Gate(gate.id))
}

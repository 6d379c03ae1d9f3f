//! Flyer physics
//!
//! Fixed-tick integration: one call to [`integrate`] is one tick. Velocity and
//! gravity are in px/tick and px/tick².

use super::state::Flyer;
use crate::tuning::Tuning;

/// Which world boundary the flyer touched during integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    None,
    /// Clamped to the ceiling with velocity zeroed (not fatal)
    Ceiling,
    /// Clamped to rest on the ground (fatal)
    Floor,
}

/// Apply gravity for one tick, derive tilt, and enforce floor/ceiling bounds
pub fn integrate(flyer: &mut Flyer, tuning: &Tuning) -> BoundaryContact {
    flyer.vel_y += tuning.gravity;
    flyer.pos.y += flyer.vel_y;

    // Tilt follows velocity only while descending; a flap sets it while climbing
    if flyer.vel_y > 0.0 {
        flyer.tilt = (flyer.vel_y * tuning.tilt_gain).min(tuning.max_tilt);
    }

    if flyer.bottom() >= tuning.floor_y() {
        flyer.pos.y = tuning.floor_rest_y();
        return BoundaryContact::Floor;
    }

    if flyer.pos.y <= tuning.ceiling_y {
        flyer.pos.y = tuning.ceiling_y;
        flyer.vel_y = 0.0;
        return BoundaryContact::Ceiling;
    }

    BoundaryContact::None
}

/// Overwrite velocity with the upward impulse and set the climbing tilt
pub fn apply_impulse(flyer: &mut Flyer, tuning: &Tuning) {
    flyer.vel_y = tuning.impulse;
    flyer.tilt = tuning.climb_tilt;
}

/// Cosmetic hover while waiting in Ready. No gravity is applied.
pub fn idle_bob(flyer: &mut Flyer, idle_ticks: u64, tuning: &Tuning) {
    let wave = (idle_ticks as f32 * tuning.idle_frequency).sin();
    flyer.pos.y += wave * tuning.idle_amplitude;
    flyer.tilt = wave * tuning.idle_tilt_amplitude;
}

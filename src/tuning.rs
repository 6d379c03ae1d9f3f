//! Data-driven world constants
//!
//! Every number the simulation uses lives in [`Tuning`]. Values are fixed at
//! construction and never mutated during play.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reasons a tuning set is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// JSON could not be parsed into a tuning set
    Parse(String),
    /// A dimension, speed or rate that must be positive was not
    NonPositive { field: &'static str, value: f32 },
    /// The impulse must point upward (negative Y)
    ImpulseNotUpward { value: f32 },
    /// A value overflowed to infinity or is NaN
    NotFinite { field: &'static str, value: f32 },
    /// Minimum arm height below zero
    NegativeArm { value: f32 },
    /// The flyer is taller than the space between ceiling and floor
    FlyerDoesNotFit { ceiling_y: f32, floor_y: f32 },
    /// Spawn interval of zero ticks
    ZeroSpawnInterval,
    /// The gap plus both minimum arms does not fit above the floor
    GapDoesNotFit { min_top: f32, max_top: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning json: {msg}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            Self::ImpulseNotUpward { value } => {
                write!(f, "impulse must be negative/upward (got {value})")
            }
            Self::NotFinite { field, value } => write!(f, "{field} must be finite (got {value})"),
            Self::NegativeArm { value } => {
                write!(f, "min_arm_height must not be negative (got {value})")
            }
            Self::FlyerDoesNotFit { ceiling_y, floor_y } => write!(
                f,
                "flyer does not fit between ceiling {ceiling_y} and floor {floor_y}"
            ),
            Self::ZeroSpawnInterval => write!(f, "spawn interval must be at least one tick"),
            Self::GapDoesNotFit { min_top, max_top } => write!(
                f,
                "gate gap does not fit: gap top range [{min_top}, {max_top}] is empty"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

/// World constants for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the screen
    pub ground_height: f32,
    pub ceiling_y: f32,
    /// Width of one repeating ground tile (scroll offset wraps at this)
    pub ground_tile: f32,

    // === Flyer ===
    /// Fixed horizontal position of the flyer's left edge
    pub flyer_x: f32,
    pub flyer_width: f32,
    pub flyer_height: f32,
    /// Added to vertical velocity every tick (px/tick²)
    pub gravity: f32,
    /// Vertical velocity set by a flap (px/tick, negative is up)
    pub impulse: f32,
    /// Tilt set by a flap (degrees)
    pub climb_tilt: f32,
    /// Degrees of tilt per px/tick of descent
    pub tilt_gain: f32,
    pub max_tilt: f32,

    // === Gates ===
    pub gate_width: f32,
    pub gap_height: f32,
    /// Minimum solid extent of each arm
    pub min_arm_height: f32,
    /// Leftward scroll per tick (px/tick)
    pub gate_speed: f32,
    /// A gate spawns every this many Playing ticks
    pub spawn_interval: u64,

    // === Idle bob (Ready phase, cosmetic) ===
    pub idle_frequency: f32,
    pub idle_amplitude: f32,
    pub idle_tilt_amplitude: f32,

    // === Timing ===
    /// Simulation ticks per second of wall-clock time
    pub tick_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 600.0,
            ground_height: 100.0,
            ceiling_y: 0.0,
            ground_tile: 40.0,

            flyer_x: 80.0,
            flyer_width: 34.0,
            flyer_height: 24.0,
            gravity: 0.25,
            impulse: -6.0,
            climb_tilt: -20.0,
            tilt_gain: 3.0,
            max_tilt: 90.0,

            gate_width: 80.0,
            gap_height: 150.0,
            min_arm_height: 50.0,
            gate_speed: 2.0,
            spawn_interval: 90,

            idle_frequency: 0.1,
            idle_amplitude: 0.5,
            idle_tilt_amplitude: 10.0,

            tick_rate: 60.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning set from JSON (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the constants describe a playable world
    pub fn validate(&self) -> Result<(), TuningError> {
        let all = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("ceiling_y", self.ceiling_y),
            ("ground_tile", self.ground_tile),
            ("flyer_x", self.flyer_x),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("gravity", self.gravity),
            ("impulse", self.impulse),
            ("climb_tilt", self.climb_tilt),
            ("tilt_gain", self.tilt_gain),
            ("max_tilt", self.max_tilt),
            ("gate_width", self.gate_width),
            ("gap_height", self.gap_height),
            ("min_arm_height", self.min_arm_height),
            ("gate_speed", self.gate_speed),
            ("idle_frequency", self.idle_frequency),
            ("idle_amplitude", self.idle_amplitude),
            ("idle_tilt_amplitude", self.idle_tilt_amplitude),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_tile", self.ground_tile),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("gravity", self.gravity),
            ("gate_width", self.gate_width),
            ("gap_height", self.gap_height),
            ("gate_speed", self.gate_speed),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if !(self.impulse < 0.0) {
            return Err(TuningError::ImpulseNotUpward {
                value: self.impulse,
            });
        }
        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }
        if self.min_arm_height < 0.0 {
            return Err(TuningError::NegativeArm {
                value: self.min_arm_height,
            });
        }
        // Derived values can still overflow even when every field is finite
        let floor_y = self.floor_y();
        if !floor_y.is_finite() || self.floor_rest_y() <= self.ceiling_y {
            return Err(TuningError::FlyerDoesNotFit {
                ceiling_y: self.ceiling_y,
                floor_y,
            });
        }
        let (min_top, max_top) = self.gap_top_range();
        if !max_top.is_finite() || max_top < min_top {
            return Err(TuningError::GapDoesNotFit { min_top, max_top });
        }
        Ok(())
    }

    /// Y coordinate of the ground surface
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Inclusive bounds for a gate's gap top, leaving both arms at least `min_arm_height`
    #[inline]
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.min_arm_height;
        let max = self.floor_y() - self.gap_height - self.min_arm_height;
        (min, max)
    }

    /// X coordinate new gates appear at (right edge of the visible world)
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.screen_width
    }

    /// Initial flyer Y (vertically centered on screen)
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// Lowest Y the flyer's top edge can rest at
    #[inline]
    pub fn floor_rest_y(&self) -> f32 {
        self.floor_y() - self.flyer_height
    }
}

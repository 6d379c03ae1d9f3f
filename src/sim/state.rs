//! Game state and core simulation types
//!
//! Everything `tick` mutates lives in [`GameState`]. Rendering reads it through
//! [`crate::snapshot::RenderSnapshot`]; nothing here touches I/O.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::score::ScoreTracker;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start input, flyer bobs in place
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for reset
    Ended,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Flyer touched the ground
    Floor,
    /// Flyer hit a gate arm (gate id)
    Gate(u32),
}

/// Notable things that happened during an input or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Started,
    Flapped,
    GateSpawned { id: u32 },
    GatePassed { id: u32, score: u32 },
    GameOver {
        score: u32,
        best: u32,
        new_best: bool,
        cause: EndCause,
    },
    Reset,
}

/// Serialize a batch of events as a JSON array for script-side consumers
pub fn events_to_json(events: &[GameEvent]) -> serde_json::Result<String> {
    serde_json::to_string(events)
}

/// The player-controlled entity
///
/// `pos.x` never changes; the world scrolls past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flyer {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in px/tick (positive is down)
    pub vel_y: f32,
    /// Visual tilt in degrees (positive noses down)
    pub tilt: f32,
}

impl Flyer {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.flyer_x, tuning.start_y()),
            size: Vec2::new(tuning.flyer_width, tuning.flyer_height),
            vel_y: 0.0,
            tilt: 0.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A paired top/bottom obstacle with a vertical gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Bottom of the top arm
    pub gap_top: f32,
    /// Top of the bottom arm
    pub gap_bottom: f32,
    pub passed: bool,
}

impl Gate {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete mutable game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub flyer: Flyer,
    /// Live gates, oldest first
    pub gates: Vec<Gate>,
    pub score: ScoreTracker,
    /// Ticks spent in Playing since the last reset
    pub play_ticks: u64,
    /// Ticks spent in Ready since the last reset (drives the idle bob)
    pub idle_ticks: u64,
    /// Ground pattern scroll, wraps at `Tuning::ground_tile`
    pub ground_offset: f32,
    /// Run seed, kept for logging
    pub seed: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Fresh state in Ready with the given best score carried in
    pub fn new(tuning: &Tuning, seed: u64, best_score: u32) -> Self {
        Self {
            phase: GamePhase::Ready,
            flyer: Flyer::new(tuning),
            gates: Vec::new(),
            score: ScoreTracker::new(best_score),
            play_ticks: 0,
            idle_ticks: 0,
            ground_offset: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new gate ID
    pub fn next_gate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

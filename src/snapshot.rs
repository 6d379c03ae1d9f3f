//! Read-only view of the game for renderers

use serde::Serialize;

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlyerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, positive noses down
    pub tilt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GateView {
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub width: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub flyer: FlyerView,
    pub gates: Vec<GateView>,
    pub score: u32,
    pub best_score: u32,
    pub ground_offset: f32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let flyer = &state.flyer;
        Self {
            phase: state.phase,
            flyer: FlyerView {
                x: flyer.pos.x,
                y: flyer.pos.y,
                width: flyer.size.x,
                height: flyer.size.y,
                tilt: flyer.tilt,
            },
            gates: state
                .gates
                .iter()
                .map(|g| GateView {
                    x: g.x,
                    gap_top: g.gap_top,
                    gap_bottom: g.gap_bottom,
                    width: g.width,
                })
                .collect(),
            score: state.score.score(),
            best_score: state.score.best(),
            ground_offset: state.ground_offset,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

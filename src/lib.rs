//! Flappy - side-scrolling gate runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flyer physics, gates, collisions, phases)
//! - `game`: `GameCore` facade driven by an external frame loop
//! - `platform`: Fixed timestep clock
//! - `persistence`: Best-score storage port
//! - `tuning`: Data-driven world constants
//! - `snapshot`: Read-only view for renderers

pub mod game;
pub mod persistence;
pub mod platform;
pub mod score;
pub mod sim;
pub mod snapshot;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use game::GameCore;
pub use persistence::{BestScoreStore, MemoryStore, StoreError};
pub use score::ScoreTracker;
pub use sim::{GameEvent, GamePhase, Input};
pub use snapshot::RenderSnapshot;
pub use tuning::{Tuning, TuningError};

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Whole ticks only (px/tick units)
//! - Seeded RNG only
//! - Gates kept in creation order
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod field;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{detect, hits_floor, hits_gate};
pub use physics::{BoundaryContact, apply_impulse, idle_bob, integrate};
pub use state::{EndCause, Flyer, GameEvent, GamePhase, GameState, Gate, events_to_json};
pub use tick::{Input, apply_input, tick};

//! Platform abstraction layer
//!
//! Converts wall-clock frame time into whole simulation ticks so gameplay
//! speed does not depend on the display refresh rate.

pub mod clock;

pub use clock::{FixedStepClock, MAX_FRAME_DT, MAX_SUBSTEPS};

//! Fixed timestep accumulator

/// Maximum ticks run for a single frame, prevents a spiral of death after a stall
pub const MAX_SUBSTEPS: u32 = 8;

/// Longest frame (seconds) fed into the accumulator
pub const MAX_FRAME_DT: f32 = 0.1;

/// Turns elapsed frame time into a number of fixed ticks to run
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    accumulator: f32,
}

impl FixedStepClock {
    /// Clock for `tick_rate` ticks per second
    pub fn new(tick_rate: f32) -> Self {
        Self {
            step: 1.0 / tick_rate,
            accumulator: 0.0,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed seconds, returns how many ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Anything beyond the substep cap is dropped, not carried into the next frame
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Drop any partial tick (e.g. after a pause or reset)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}

//! Current and best score
//!
//! The best score is persisted through [`crate::persistence::BestScoreStore`];
//! this type only decides when a save is needed.

/// Score for the current run plus the best score seen this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: u32,
    best: u32,
}

impl ScoreTracker {
    pub fn new(best: u32) -> Self {
        Self { score: 0, best }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Count one cleared gate, returns the new score
    pub fn increment(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    /// Clear the run score (best is kept)
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Fold the run score into the best score.
    ///
    /// Returns true when the best score changed and should be persisted.
    /// Calling it again with the same score is a no-op.
    pub fn commit(&mut self) -> bool {
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }
}

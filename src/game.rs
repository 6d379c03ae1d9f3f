//! Game facade
//!
//! [`GameCore`] ties the pure simulation to a best-score store and a fixed-step
//! clock. Callers own it explicitly and drive it from their own frame loop.

use crate::persistence::{self, BestScoreStore};
use crate::platform::FixedStepClock;
use crate::sim::{self, GameEvent, GamePhase, GameState, Input};
use crate::snapshot::RenderSnapshot;
use crate::tuning::{Tuning, TuningError};

/// One game instance
#[derive(Debug)]
pub struct GameCore<S: BestScoreStore> {
    state: GameState,
    tuning: Tuning,
    store: S,
    clock: FixedStepClock,
}

impl<S: BestScoreStore> GameCore<S> {
    /// Create a game in Ready, loading the best score from `store` once.
    ///
    /// Fails if `tuning` does not describe a playable world.
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let best = persistence::load_or_default(&store);
        Ok(Self {
            state: GameState::new(&tuning, seed, best),
            clock: FixedStepClock::new(tuning.tick_rate),
            tuning,
            store,
        })
    }

    pub fn start(&mut self) -> Option<GameEvent> {
        self.handle_input(Input::Start)
    }

    pub fn flap(&mut self) -> Option<GameEvent> {
        self.handle_input(Input::Flap)
    }

    pub fn reset(&mut self) -> Option<GameEvent> {
        let event = self.handle_input(Input::Reset);
        if event.is_some() {
            self.clock.clear();
        }
        event
    }

    /// Deliver one input between ticks
    pub fn handle_input(&mut self, input: Input) -> Option<GameEvent> {
        sim::apply_input(&mut self.state, input, &self.tuning)
    }

    /// Run exactly one simulation tick
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = sim::tick(&mut self.state, &self.tuning);
        for event in &events {
            if let GameEvent::GameOver {
                new_best: true,
                best,
                ..
            } = *event
            {
                log::info!("New best score: {}", best);
                persistence::save_or_log(&mut self.store, best);
            }
        }
        events
    }

    /// Feed one display frame's elapsed seconds; runs as many ticks as fit
    pub fn advance(&mut self, elapsed: f32) -> Vec<GameEvent> {
        let ticks = self.clock.advance(elapsed);
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.tick());
        }
        events
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score.score()
    }

    pub fn best_score(&self) -> u32 {
        self.state.score.best()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

//! Flappy entry point
//!
//! On wasm32 the page constructs `flappy::wasm::WasmGame` directly. Natively
//! this runs a headless demo: a simple autopilot plays one game at 60 Hz and
//! the best score is kept in a JSON file in the temp directory.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy::persistence::JsonFileStore;
    use flappy::{GameCore, GameEvent, GamePhase, Tuning};

    env_logger::init();
    log::info!("Flappy (native) starting headless demo...");

    let tuning = match std::env::var("FLAPPY_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Bad tuning file {}: {}", path, e);
                return;
            }
        },
        Err(_) => Tuning::default(),
    };

    let store = JsonFileStore::new(std::env::temp_dir().join("flappy").join("best.json"));
    let seed = rand::random::<u64>();
    let mut game = match GameCore::new(tuning, store, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            return;
        }
    };

    game.start();
    let frame = 1.0 / game.tuning().tick_rate;
    // Five minutes of frames at most
    let max_frames = (game.tuning().tick_rate * 300.0) as u32;
    for _ in 0..max_frames {
        if autopilot_wants_flap(&game) {
            game.flap();
        }
        // Nudge past the step so float error never skips a tick
        for event in game.advance(frame * 1.0001) {
            if let GameEvent::GatePassed { score, .. } = event {
                log::info!("Score {}", score);
            }
        }
        if game.phase() == GamePhase::Ended {
            break;
        }
    }

    println!(
        "Demo finished: phase {:?}, score {}, best {}",
        game.phase(),
        game.score(),
        game.best_score()
    );
}

/// Flap when falling below the middle of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flap<S: flappy::BestScoreStore>(game: &flappy::GameCore<S>) -> bool {
    let state = game.state();
    let flyer = &state.flyer;
    let target = state
        .gates
        .iter()
        .find(|g| g.right() >= flyer.left())
        .map(|g| (g.gap_top + g.gap_bottom) / 2.0)
        .unwrap_or(game.tuning().start_y());
    let center = flyer.pos.y + flyer.size.y / 2.0;
    flyer.vel_y > 0.0 && center > target + 10.0
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flappy::wasm::WasmGame, this is just to satisfy the compiler
}

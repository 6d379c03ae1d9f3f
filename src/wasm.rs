//! JavaScript-facing handle
//!
//! The page owns input wiring and drawing; it calls into [`WasmGame`] once per
//! animation frame and renders the JSON snapshot it gets back.

use wasm_bindgen::prelude::*;

use crate::game::GameCore;
use crate::persistence::LocalStorageStore;
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct WasmGame {
    core: GameCore<LocalStorageStore>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmGame, JsValue> {
        console_error_panic_hook::set_once();
        // Ignore the error if a logger is already installed by a previous instance
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = js_sys::Date::now() as u64;
        log::info!("Flappy starting (seed {})", seed);
        let core = GameCore::new(Tuning::default(), LocalStorageStore::new(), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { core })
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn flap(&mut self) {
        self.core.flap();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Click / Space handler: start, flap, or nothing depending on phase
    pub fn tap(&mut self) {
        self.core.handle_input(crate::sim::Input::Tap);
    }

    /// Advance by one animation frame's elapsed seconds.
    ///
    /// Returns the events raised during the frame as a JSON array so the page
    /// can play sounds or update its overlay.
    pub fn frame(&mut self, elapsed_secs: f32) -> Result<String, JsValue> {
        let events = self.core.advance(elapsed_secs);
        crate::sim::events_to_json(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current render snapshot as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

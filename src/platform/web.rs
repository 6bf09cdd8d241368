//! Browser bindings (wasm32 only)
//!
//! JavaScript owns the canvas, the DOM chrome and the
//! `requestAnimationFrame` loop; it calls into [`WebGame`] once per frame
//! and draws the JSON snapshot it gets back.

use wasm_bindgen::prelude::*;

use crate::engine::Engine;
use crate::persistence::LocalStorageStore;
use crate::platform::{FrameDriver, InputEvent, apply_input};
use crate::theme::Theme;
use crate::tuning::Tuning;

/// Install logging and the panic hook; runs once when the module loads
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    engine: Engine<LocalStorageStore>,
    driver: FrameDriver,
    theme: Theme,
}

#[wasm_bindgen]
impl WebGame {
    /// Build from optional tuning and theme JSON
    ///
    /// Bad tuning is a hard error. Without a theme the day preset is used.
    #[wasm_bindgen(constructor)]
    pub fn new(
        tuning_json: Option<String>,
        theme_json: Option<String>,
    ) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => {
                Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Tuning::default(),
        };
        let theme = theme_json
            .map(|json| Theme::from_json_lenient(&json))
            .unwrap_or_else(Theme::day);
        let engine = Engine::new(tuning, LocalStorageStore::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Web game created with theme '{}'", theme.name);

        Ok(WebGame {
            engine,
            driver: FrameDriver::default(),
            theme,
        })
    }

    /// Pointer press on the playfield
    pub fn flap(&mut self) {
        apply_input(&mut self.engine, &InputEvent::PointerDown);
    }

    /// Key press by `KeyboardEvent.code`; returns true when consumed
    pub fn key_down(&mut self, code: String) -> bool {
        apply_input(&mut self.engine, &InputEvent::KeyDown(code))
    }

    /// Advance by a frame's elapsed seconds; returns ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        self.driver.advance(&mut self.engine, dt)
    }

    /// "Play again": back to waiting for the first flap
    pub fn reset(&mut self) {
        self.engine.reset();
        self.driver.reset();
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn best_score(&self) -> u32 {
        self.engine.best_score()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.engine
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Theme with layout strings resolved against the playfield
    pub fn theme_json(&self) -> Result<String, JsValue> {
        let tuning = self.engine.tuning();
        self.theme
            .resolve(tuning.playfield_width, tuning.playfield_height)
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

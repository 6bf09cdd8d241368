//! Raw input to flap mapping
//!
//! The game recognises exactly one action. Pointer presses and the space
//! bar trigger it; every other event is dropped.

use crate::engine::Engine;
use crate::persistence::BestScoreStore;

/// Key code (DOM `KeyboardEvent.code`) that flaps
pub const FLAP_KEY: &str = "Space";

/// Input as delivered by the host platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse click or touch start anywhere on the playfield
    PointerDown,
    /// Key press, by physical key code
    KeyDown(String),
}

impl InputEvent {
    pub fn is_flap(&self) -> bool {
        match self {
            InputEvent::PointerDown => true,
            InputEvent::KeyDown(code) => code == FLAP_KEY,
        }
    }
}

/// Forward a flap to the engine; returns whether the event was consumed
pub fn apply_input<S: BestScoreStore>(engine: &mut Engine<S>, event: &InputEvent) -> bool {
    if event.is_flap() {
        engine.jump();
        true
    } else {
        false
    }
}

//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer/key to flap)
//! - Frame timing (variable frame delta to fixed ticks)
//! - Browser bindings (wasm32 only)

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputEvent, apply_input};
pub use time::FrameDriver;

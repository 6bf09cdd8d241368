//! Flappy Sim - a single-screen gate-flapping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `engine`: Session owner exposing jump/reset/tick to the presentation layer
//! - `persistence`: Best-score store contract and backends
//! - `platform`: Input mapping, frame driver, browser bindings
//! - `tuning`: Data-driven physics and geometry constants
//! - `theme`: Cosmetic theming consumed by renderers only

pub mod autopilot;
pub mod engine;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod snapshot;
pub mod theme;
pub mod tuning;

pub use engine::Engine;
pub use persistence::{BestScoreStore, MemoryStore, PersistError};
pub use snapshot::Snapshot;
pub use theme::Theme;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Obstacles kept in spawn order (left to right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use state::{Avatar, CollisionKind, GameEvent, GameState, Gap, Obstacle, SessionPhase};
pub use tick::{generate_gap, tick};

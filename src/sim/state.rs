//! Game state and core simulation types
//!
//! Everything one session owns lives here. A reset throws the whole
//! [`GameState`] away and builds a fresh one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first flap
    #[default]
    Idle,
    /// Actively simulating
    Running,
    /// Crashed; terminal until reset
    Over,
}

/// What the avatar ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ground,
    Ceiling,
    /// Obstacle segment, by obstacle id
    Obstacle(u32),
}

/// Things that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { id: u32 },
    ObstacleRemoved { id: u32 },
    Scored { id: u32, score: u32 },
    Crashed(CollisionKind),
}

/// The player-controlled falling square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x is fixed for the whole session
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
}

impl Avatar {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.avatar_spawn,
            vel: 0.0,
            rotation: 0.0,
        }
    }

    /// Overwrite velocity with the flap impulse; flaps never stack
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.jump_impulse;
        self.rotation = tuning.jump_rotation;
    }

    /// Semi-implicit step: move by the current velocity, then accelerate
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.pos.y += self.vel;
        self.vel += tuning.gravity;
        self.rotation = (self.vel * tuning.rotation_gain).min(tuning.max_rotation);
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self, size: f32) -> f32 {
        self.pos.y + size
    }
}

/// Vertical opening in an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Y of the gap's top edge (height of the upper segment)
    pub top: f32,
    pub height: f32,
}

impl Gap {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A pair of barriers with a passable gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub gap: Gap,
    /// Set once the avatar has cleared it; scoring reads this
    pub passed: bool,
}

impl Obstacle {
    /// Right (trailing) edge
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Height of the lower segment between the gap and the ground line
    pub fn lower_segment_height(&self, tuning: &Tuning) -> f32 {
        tuning.ground_y() - self.gap.bottom()
    }
}

/// Complete per-session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: SessionPhase,
    pub avatar: Avatar,
    /// Ordered oldest (leftmost) to newest (rightmost)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Simulation tick counter for this session
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Fresh session at the spawn pose, waiting for input
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: SessionPhase::Idle,
            avatar: Avatar::spawn(tuning),
            obstacles: Vec::new(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Most recently spawned obstacle
    pub fn newest_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_at_spawn() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.avatar.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.avatar.vel, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::spawn(&tuning);
        avatar.vel = 6.5;
        avatar.flap(&tuning);
        avatar.flap(&tuning);
        assert_eq!(avatar.vel, -8.0);
        assert_eq!(avatar.rotation, -20.0);
    }

    #[test]
    fn test_integrate_moves_then_accelerates() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::spawn(&tuning);
        avatar.flap(&tuning);
        avatar.integrate(&tuning);
        assert_eq!(avatar.pos.y, 292.0);
        assert_eq!(avatar.vel, -7.5);
        assert_eq!(avatar.rotation, -22.5);
    }

    #[test]
    fn test_rotation_clamped_above_only() {
        let tuning = Tuning::default();
        let mut avatar = Avatar::spawn(&tuning);
        avatar.vel = 40.0;
        avatar.integrate(&tuning);
        assert_eq!(avatar.rotation, 45.0);

        avatar.vel = -30.0;
        avatar.integrate(&tuning);
        assert_eq!(avatar.rotation, -88.5);
    }

    #[test]
    fn test_obstacle_ids_are_unique() {
        let mut state = GameState::new(&Tuning::default());
        let a = state.next_obstacle_id();
        let b = state.next_obstacle_id();
        assert_ne!(a, b);
    }
}

//! Demo/attract mode player
//!
//! Steers toward the next gap by keeping the avatar's bottom edge a safe
//! distance above the gap floor: it flaps whenever the next tick would
//! carry the avatar below that line.

use crate::engine::Engine;
use crate::persistence::BestScoreStore;
use crate::sim::{Gap, SessionPhase};

/// Simple one-step-lookahead flapper
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Clearance kept between the avatar's bottom edge and the gap floor
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 20.0 }
    }
}

impl Autopilot {
    /// Gap the avatar must get through next; the playfield centre when none
    pub fn target_gap<S: BestScoreStore>(&self, engine: &Engine<S>) -> Gap {
        let tuning = engine.tuning();
        let avatar_x = engine.avatar().pos.x;
        engine
            .obstacles()
            .iter()
            .find(|o| o.trailing_edge(tuning.obstacle_width) > avatar_x)
            .map(|o| o.gap)
            .unwrap_or_else(|| Gap {
                top: (tuning.ground_y() - tuning.gap_height) / 2.0,
                height: tuning.gap_height,
            })
    }

    /// Whether to flap before the next tick
    pub fn should_flap<S: BestScoreStore>(&self, engine: &Engine<S>) -> bool {
        if engine.phase() != SessionPhase::Running {
            return false;
        }
        let tuning = engine.tuning();
        let avatar = engine.avatar();
        let floor = self.target_gap(engine).bottom() - self.margin - tuning.avatar_size;
        avatar.pos.y + avatar.vel >= floor
    }

    /// Flap if needed; starts a fresh session when idle. Returns true on a flap.
    pub fn drive<S: BestScoreStore>(&self, engine: &mut Engine<S>) -> bool {
        if engine.phase() == SessionPhase::Idle || self.should_flap(engine) {
            engine.jump();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::tuning::Tuning;

    #[test]
    fn test_targets_centre_without_obstacles() {
        let engine = Engine::with_seed(Tuning::default(), MemoryStore::new(), 1).unwrap();
        let gap = Autopilot::default().target_gap(&engine);
        assert_eq!(gap.top, 200.0);
        assert_eq!(gap.bottom(), 350.0);
    }

    #[test]
    fn test_drive_starts_idle_session() {
        let mut engine = Engine::with_seed(Tuning::default(), MemoryStore::new(), 1).unwrap();
        assert!(Autopilot::default().drive(&mut engine));
        assert_eq!(engine.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_never_flaps_when_over() {
        let mut engine = Engine::with_seed(Tuning::default(), MemoryStore::new(), 1).unwrap();
        engine.jump();
        // Dive into the ground
        for _ in 0..200 {
            engine.tick();
        }
        assert!(engine.is_game_over());
        assert!(!Autopilot::default().should_flap(&engine));
    }

    #[test]
    fn test_survives_and_scores() {
        for seed in [1u64, 7, 2024] {
            let mut engine =
                Engine::with_seed(Tuning::default(), MemoryStore::new(), seed).unwrap();
            let pilot = Autopilot::default();
            for _ in 0..2000 {
                pilot.drive(&mut engine);
                engine.tick();
            }
            assert!(!engine.is_game_over(), "seed {seed} crashed at {}", engine.score());
            assert!(engine.score() >= 5, "seed {seed} scored {}", engine.score());
        }
    }
}

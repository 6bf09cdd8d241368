//! Session engine
//!
//! Owns one session's state, the seeded RNG and the injected best-score
//! store. The presentation layer drives it with `jump` and `tick` and reads
//! back a [`Snapshot`] to draw; the engine never schedules itself.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::persistence::{BestScoreStore, MemoryStore};
use crate::sim::{self, Avatar, GameEvent, GameState, Obstacle, SessionPhase};
use crate::snapshot::Snapshot;
use crate::tuning::{Tuning, TuningError};

/// The simulation engine
pub struct Engine<S: BestScoreStore = MemoryStore> {
    tuning: Tuning,
    state: GameState,
    rng: Pcg32,
    store: S,
    best: u32,
    /// Set when the last finished session reached the best (ties included,
    /// zero excluded); only a strictly higher score is written to the store
    new_record: bool,
    /// Run seed for reproducibility
    seed: u64,
}

impl<S: BestScoreStore> Engine<S> {
    /// Create an engine with an entropy-derived seed
    pub fn new(tuning: Tuning, store: S) -> Result<Self, TuningError> {
        Self::with_seed(tuning, store, rand::random())
    }

    /// Create an engine with a fixed seed (replays and tests)
    pub fn with_seed(tuning: Tuning, mut store: S, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let best = match store.load() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                log::warn!("Could not read best score, starting from 0: {}", e);
                0
            }
        };
        log::info!("Engine ready (seed {}, best {})", seed, best);

        Ok(Self {
            state: GameState::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            store,
            best,
            new_record: false,
            seed,
        })
    }

    /// Discard the session: spawn pose, no obstacles, score 0, `Idle`
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.new_record = false;
    }

    /// Flap. From `Idle` or `Over` this first starts a fresh session.
    pub fn jump(&mut self) {
        if self.state.phase != SessionPhase::Running {
            self.reset();
            self.state.phase = SessionPhase::Running;
            log::info!("Session started");
        }
        self.state.avatar.flap(&self.tuning);
    }

    /// Advance one fixed step; no-op unless `Running`
    pub fn tick(&mut self) {
        let was_running = self.state.phase == SessionPhase::Running;
        sim::tick(&mut self.state, &self.tuning, &mut self.rng);
        if was_running && self.state.phase == SessionPhase::Over {
            self.finish_session();
        }
    }

    fn finish_session(&mut self) {
        let score = self.state.score;
        if score > self.best {
            self.best = score;
            if let Err(e) = self.store.save(score) {
                log::warn!("Failed to persist best score {}: {}", score, e);
            }
        }
        self.new_record = score > 0 && score == self.best;
        log::info!(
            "Game over after {} ticks: score {}, best {}{}",
            self.state.time_ticks,
            score,
            self.best,
            if self.new_record { " (new record)" } else { "" }
        );
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == SessionPhase::Over
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn avatar(&self) -> &Avatar {
        &self.state.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.tuning, self.best, self.new_record)
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

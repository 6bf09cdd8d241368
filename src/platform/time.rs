//! Fixed-step frame driver
//!
//! The host calls [`FrameDriver::advance`] once per display refresh with the
//! elapsed wall time; the driver turns that into whole engine ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::engine::Engine;
use crate::persistence::BestScoreStore;

/// Accumulates frame time and spends it in `SIM_DT` ticks
#[derive(Debug, Clone)]
pub struct FrameDriver {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameDriver {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Run as many ticks as `frame_dt` seconds cover; returns the count
    pub fn advance<S: BestScoreStore>(&mut self, engine: &mut Engine<S>, frame_dt: f32) -> u32 {
        // Long stalls (tab hidden, debugger) are clamped rather than replayed,
        // but never below one whole step
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT.max(self.step))
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            engine.tick();
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop the backlog once the substep cap is hit
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

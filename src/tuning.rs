//! Data-driven game balance
//!
//! Every physics and geometry constant the simulation reads lives in
//! [`Tuning`]. Units are pixels and ticks: velocities are pixels per tick,
//! gravity is pixels per tick squared, angles are degrees.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a tuning record
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Physics and playfield constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Height of the ground strip at the bottom of the playfield
    pub ground_height: f32,

    // === Avatar ===
    /// Side length of the avatar's square hitbox
    pub avatar_size: f32,
    /// Spawn pose (top-left corner); x never changes during a session
    pub avatar_spawn: Vec2,
    /// Downward acceleration added to velocity every tick
    pub gravity: f32,
    /// Velocity set (not added) by a flap; negative is upward
    pub jump_impulse: f32,
    /// Rotation snapped to on a flap (degrees, nose-up)
    pub jump_rotation: f32,
    /// Rotation = velocity * gain, clamped above by `max_rotation`
    pub rotation_gain: f32,
    pub max_rotation: f32,

    // === Obstacles ===
    /// Leftward scroll per tick
    pub scroll_speed: f32,
    pub obstacle_width: f32,
    /// Vertical opening, identical for every obstacle
    pub gap_height: f32,
    /// A new obstacle spawns once the newest one is this far from the right edge
    pub spawn_spacing: f32,
    /// Ceiling of the range the gap top may be drawn from
    pub gap_max_top: f32,
    /// Minimum clearance between the playfield top and the gap top
    pub gap_min_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: 800.0,
            playfield_height: 600.0,
            ground_height: 50.0,

            avatar_size: 30.0,
            avatar_spawn: Vec2::new(100.0, 300.0),
            gravity: 0.5,
            jump_impulse: -8.0,
            jump_rotation: -20.0,
            rotation_gain: 3.0,
            max_rotation: 45.0,

            scroll_speed: 2.0,
            obstacle_width: 60.0,
            gap_height: 150.0,
            spawn_spacing: 300.0,
            // Gap tops land in [50, 200)
            gap_max_top: 350.0,
            gap_min_margin: 50.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the ground line (top of the ground strip)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Check the geometric invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("avatar_size", self.avatar_size),
            ("scroll_speed", self.scroll_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("spawn_spacing", self.spawn_spacing),
            ("gap_max_top", self.gap_max_top),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let finite = [
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("jump_rotation", self.jump_rotation),
            ("rotation_gain", self.rotation_gain),
            ("max_rotation", self.max_rotation),
            ("gap_min_margin", self.gap_min_margin),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.ground_height < 0.0 || self.ground_height >= self.playfield_height {
            return Err(invalid(
                "ground_height",
                format!("must lie in [0, {})", self.playfield_height),
            ));
        }
        if self.gap_min_margin < 0.0 {
            return Err(invalid("gap_min_margin", "must not be negative".into()));
        }

        let ground_y = self.ground_y();
        if self.gap_height >= ground_y {
            return Err(invalid(
                "gap_height",
                format!("must be below the open playfield height {ground_y}"),
            ));
        }
        if self.gap_max_top > ground_y {
            return Err(invalid(
                "gap_max_top",
                format!("must not exceed the ground line {ground_y}"),
            ));
        }
        if self.gap_min_margin + self.gap_height >= self.gap_max_top {
            return Err(invalid(
                "gap_max_top",
                format!(
                    "must exceed gap_min_margin + gap_height ({})",
                    self.gap_min_margin + self.gap_height
                ),
            ));
        }

        if self.spawn_spacing >= self.playfield_width {
            return Err(invalid(
                "spawn_spacing",
                format!("must be below playfield_width {}", self.playfield_width),
            ));
        }

        let spawn = self.avatar_spawn;
        if !spawn.is_finite()
            || spawn.x < 0.0
            || spawn.x + self.avatar_size > self.playfield_width
            || spawn.y <= 0.0
            || spawn.y + self.avatar_size >= ground_y
        {
            return Err(invalid(
                "avatar_spawn",
                format!("({}, {}) is outside the open playfield", spawn.x, spawn.y),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().ground_y(), 550.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.4, "scroll_speed": 3.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.4);
        assert_eq!(tuning.scroll_speed, 3.0);
        assert_eq!(tuning.gap_height, 150.0);
        assert_eq!(tuning.avatar_spawn, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }

    #[test]
    fn test_gap_taller_than_playfield_rejected() {
        let tuning = Tuning {
            gap_height: 550.0,
            ..Default::default()
        };
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "gap_height"),
            other => panic!("expected gap_height error, got {other:?}"),
        }
    }

    #[test]
    fn test_gap_range_too_small_rejected() {
        let tuning = Tuning {
            gap_max_top: 200.0,
            ..Default::default()
        };
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "gap_max_top"),
            other => panic!("expected gap_max_top error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let tuning = Tuning {
            scroll_speed: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_spawn_below_ground_rejected() {
        let tuning = Tuning {
            avatar_spawn: Vec2::new(100.0, 540.0),
            ..Default::default()
        };
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "avatar_spawn"),
            other => panic!("expected avatar_spawn error, got {other:?}"),
        }
    }
}

//! Render snapshot
//!
//! Flat, serialisable copy of what a renderer needs each frame. The web
//! build hands this to JavaScript as JSON.

use serde::Serialize;

use crate::sim::{GameState, SessionPhase};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarPose {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Degrees, positive is nose-down
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_height: f32,
    /// Height of the lower segment, down to the ground line
    pub lower_height: f32,
    pub passed: bool,
}

/// Everything the presentation layer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub avatar: AvatarPose,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub best: u32,
    pub phase: SessionPhase,
    /// Finished session reached the best score (ties count)
    pub new_record: bool,
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_height: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState, tuning: &Tuning, best: u32, new_record: bool) -> Self {
        let avatar = AvatarPose {
            x: state.avatar.pos.x,
            y: state.avatar.pos.y,
            size: tuning.avatar_size,
            rotation: state.avatar.rotation,
        };
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                id: o.id,
                x: o.x,
                width: tuning.obstacle_width,
                gap_top: o.gap.top,
                gap_height: o.gap.height,
                lower_height: o.lower_segment_height(tuning),
                passed: o.passed,
            })
            .collect();

        Self {
            avatar,
            obstacles,
            score: state.score,
            best,
            phase: state.phase,
            new_record,
            playfield_width: tuning.playfield_width,
            playfield_height: tuning.playfield_height,
            ground_height: tuning.ground_height,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one step. Only a `Running` session
//! moves; `Idle` and `Over` states are left untouched.

use rand::Rng;

use super::collision::check_collision;
use super::state::{Gap, GameEvent, GameState, Obstacle, SessionPhase};
use crate::tuning::Tuning;

/// Advance the game state by one fixed timestep
///
/// Order matters: avatar, scroll + cull, spawn, score, collide. A collision
/// moves the session to `Over`; the caller decides what to do with the score.
pub fn tick<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    state.events.clear();

    if state.phase != SessionPhase::Running {
        return;
    }

    state.time_ticks += 1;

    state.avatar.integrate(tuning);

    scroll_obstacles(state, tuning);

    if should_spawn(state, tuning) {
        spawn_obstacle(state, tuning, rng);
    }

    update_score(state, tuning);

    if let Some(kind) = check_collision(&state.avatar, &state.obstacles, tuning) {
        state.phase = SessionPhase::Over;
        state.events.push(GameEvent::Crashed(kind));
    }
}

/// Move every obstacle left and drop the ones fully past the left edge
fn scroll_obstacles(state: &mut GameState, tuning: &Tuning) {
    let width = tuning.obstacle_width;
    for obstacle in &mut state.obstacles {
        obstacle.x -= tuning.scroll_speed;
    }

    let events = &mut state.events;
    state.obstacles.retain(|o| {
        let keep = o.trailing_edge(width) > 0.0;
        if !keep {
            log::debug!("Obstacle {} scrolled off", o.id);
            events.push(GameEvent::ObstacleRemoved { id: o.id });
        }
        keep
    });
}

/// Empty field, or the newest obstacle has moved far enough from the right edge
fn should_spawn(state: &GameState, tuning: &Tuning) -> bool {
    match state.newest_obstacle() {
        None => true,
        Some(newest) => newest.x < tuning.playfield_width - tuning.spawn_spacing,
    }
}

/// Append a fresh obstacle at the right edge
pub fn spawn_obstacle<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let id = state.next_obstacle_id();
    let gap = generate_gap(tuning, rng);
    log::debug!("Spawned obstacle {} with gap {:.1}..{:.1}", id, gap.top, gap.bottom());
    state.obstacles.push(Obstacle {
        id,
        x: tuning.playfield_width,
        gap,
        passed: false,
    });
    state.events.push(GameEvent::ObstacleSpawned { id });
}

/// Draw a gap whose top lies in `[gap_min_margin, gap_max_top - gap_height)`
pub fn generate_gap<R: Rng>(tuning: &Tuning, rng: &mut R) -> Gap {
    let roll: f32 = rng.random();
    let span = tuning.gap_max_top - tuning.gap_height - tuning.gap_min_margin;
    Gap {
        top: roll * span + tuning.gap_min_margin,
        height: tuning.gap_height,
    }
}

/// Score each obstacle once, the first tick its trailing edge is behind the avatar
fn update_score(state: &mut GameState, tuning: &Tuning) {
    let avatar_x = state.avatar.pos.x;
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.trailing_edge(tuning.obstacle_width) < avatar_x {
            obstacle.passed = true;
            state.score += 1;
            log::debug!("Cleared obstacle {} (score {})", obstacle.id, state.score);
            state.events.push(GameEvent::Scored {
                id: obstacle.id,
                score: state.score,
            });
        }
    }
}

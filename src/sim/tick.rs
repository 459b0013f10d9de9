//! Per-frame simulation tick
//!
//! Core game loop: spawn, move, then score and check for crashes, in that
//! order. Once the session has ended nothing runs.

use serde::{Deserialize, Serialize};

use super::collision::CollisionScorer;
use super::movement::{InputState, RetiredSet};
use super::state::{Session, SessionState, Vehicle};

/// Inputs sampled by the host for a single frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Monotonic wall-clock reading in seconds
    pub now: f64,
    pub controls: InputState,
}

/// What changed during a tick, so the host can mirror it
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub state: SessionState,
    /// Opponent created this frame
    pub spawned: Option<Vehicle>,
    /// Opponents removed this frame
    pub retired: RetiredSet,
    /// Set on exactly one frame: the one where the session ended
    pub game_over: bool,
}

impl TickReport {
    fn idle(state: SessionState) -> Self {
        Self {
            state,
            spawned: None,
            retired: Vec::new(),
            game_over: false,
        }
    }
}

/// Negative and NaN frame times count as zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        log::warn!("Ignoring invalid frame time {dt}");
        0.0
    } else {
        dt
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> TickReport {
    if session.state == SessionState::Ended {
        return TickReport::idle(SessionState::Ended);
    }
    let dt = sanitize_dt(dt);
    session.frames += 1;

    let last_spawn = session.last_spawn.unwrap_or(f64::NEG_INFINITY);
    let spawned = match session.spawner.maybe_spawn(input.now, last_spawn, &mut session.rng) {
        Some(request) => {
            session.last_spawn = Some(input.now);
            let vehicle = session.spawn_opponent(request);
            log::info!("Spawned opponent {} in lane {}", vehicle.id, vehicle.pos.x);
            Some(vehicle)
        }
        None => None,
    };

    let retired = session.integrator.advance(
        &mut session.player,
        &mut session.opponents,
        input.controls,
        dt,
    );

    let state = CollisionScorer::tick(session, dt);

    let game_over = state == SessionState::Ended && !session.game_over_announced;
    if game_over {
        session.game_over_announced = true;
        log::info!("Game over after {} frames, score {}", session.frames, session.score as u32);
    }

    TickReport {
        state,
        spawned,
        retired,
        game_over,
    }
}

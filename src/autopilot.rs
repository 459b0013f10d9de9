//! Demo autopilot
//!
//! Steers around the nearest car ahead that shares the player's lane and
//! drifts back toward the center line when the road is clear. Used by the
//! headless demo; the simulation itself never calls it.

use crate::sim::{InputState, Session, Vehicle};

/// How far ahead (in z) the autopilot reacts to traffic
pub const LOOKAHEAD: f32 = 30.0;
/// Extra lateral clearance kept around other cars
pub const CLEARANCE: f32 = 1.0;
/// Dead zone around the target lane to avoid jitter
const DEAD_ZONE: f32 = 0.25;

/// Pick steering for the next frame
pub fn steer(session: &Session, half_track_width: f32) -> InputState {
    let player = &session.player;

    let threat = session
        .opponents
        .iter()
        .filter(|opponent| is_threat(player, opponent))
        .min_by(|a, b| a.pos.z.total_cmp(&b.pos.z));

    let target_x = match threat {
        Some(opponent) => dodge_target(player, opponent, half_track_width),
        None => 0.0,
    };
    toward(player.pos.x, target_x)
}

fn is_threat(player: &Vehicle, opponent: &Vehicle) -> bool {
    let ahead = opponent.pos.z - player.pos.z;
    let reach_z = player.half_extents.z + opponent.half_extents.z;
    let reach_x = player.half_extents.x + opponent.half_extents.x + CLEARANCE;
    ahead > -reach_z && ahead < LOOKAHEAD && (opponent.pos.x - player.pos.x).abs() < reach_x
}

/// Closest lateral position that clears `opponent` and stays on the track
fn dodge_target(player: &Vehicle, opponent: &Vehicle, half_track_width: f32) -> f32 {
    let gap = player.half_extents.x + opponent.half_extents.x + CLEARANCE;
    let limit = half_track_width - player.half_extents.x;
    let left = opponent.pos.x - gap;
    let right = opponent.pos.x + gap;

    let candidates = [left, right];
    candidates
        .into_iter()
        .filter(|x| x.abs() <= limit)
        .min_by(|a, b| (a - player.pos.x).abs().total_cmp(&(b - player.pos.x).abs()))
        .unwrap_or(if opponent.pos.x > 0.0 { -limit } else { limit })
}

fn toward(current: f32, target: f32) -> InputState {
    let delta = target - current;
    InputState {
        steer_left: delta < -DEAD_ZONE,
        steer_right: delta > DEAD_ZONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::NewOpponentRequest;
    use glam::Vec3;

    fn with_opponent(x: f32, z: f32) -> Session {
        let mut session = Session::new(1);
        session.spawn_opponent(NewOpponentRequest {
            position: Vec3::new(x, 0.5, z),
            half_extents: Vec3::new(1.0, 0.5, 1.5),
        });
        session
    }

    #[test]
    fn test_clear_road_holds_center() {
        let session = Session::new(1);
        assert_eq!(steer(&session, 14.0), InputState::default());
    }

    #[test]
    fn test_dodges_car_ahead() {
        // Opponent slightly right of center: cheaper to go left
        let session = with_opponent(0.5, -5.0);
        let input = steer(&session, 14.0);
        assert!(input.steer_left && !input.steer_right);
    }

    #[test]
    fn test_ignores_far_and_passed_cars() {
        assert_eq!(steer(&with_opponent(0.0, 40.0), 14.0), InputState::default());
        assert_eq!(steer(&with_opponent(0.0, -30.0), 14.0), InputState::default());
        assert_eq!(steer(&with_opponent(8.0, -10.0), 14.0), InputState::default());
    }

    #[test]
    fn test_dodges_away_from_edge() {
        let mut session = with_opponent(-12.0, -10.0);
        session.player.pos.x = -12.5;
        let input = steer(&session, 14.0);
        assert!(input.steer_right);
    }
}

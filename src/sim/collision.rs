//! Scoring and crash detection
//!
//! The score is simply seconds survived. A crash is the first opponent (in
//! registry order) whose box overlaps the player's box.

use super::state::{OpponentRegistry, Session, SessionState, Vehicle};

/// First opponent overlapping the player, scanning in registry order
pub fn first_overlap<'a>(player: &Vehicle, opponents: &'a OpponentRegistry) -> Option<&'a Vehicle> {
    let player_box = player.bounds();
    opponents.iter().find(|opponent| opponent.bounds().overlaps(&player_box))
}

pub struct CollisionScorer;

impl CollisionScorer {
    /// Accrue score for `dt` and end the session on the first crash.
    ///
    /// Does nothing once the session has ended. Crashed opponents stay in the
    /// registry.
    pub fn tick(session: &mut Session, dt: f32) -> SessionState {
        if session.state == SessionState::Ended {
            return SessionState::Ended;
        }

        session.score += dt;

        if let Some(opponent) = first_overlap(&session.player, &session.opponents) {
            log::info!(
                "Crash into opponent {} at ({:.1}, {:.1}), score {:.2}",
                opponent.id,
                opponent.pos.x,
                opponent.pos.z,
                session.score
            );
            session.crashed_into = Some(opponent.id);
            session.state = SessionState::Ended;
        }

        session.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::NewOpponentRequest;
    use glam::Vec3;

    const HALF: Vec3 = Vec3::new(1.0, 0.5, 1.5);

    fn place(session: &mut Session, x: f32, z: f32) -> u32 {
        session
            .spawn_opponent(NewOpponentRequest {
                position: Vec3::new(x, 0.5, z),
                half_extents: HALF,
            })
            .id
    }

    #[test]
    fn test_score_accrues_without_crash() {
        let mut session = Session::new(1);
        place(&mut session, 5.0, -20.0);
        assert_eq!(CollisionScorer::tick(&mut session, 0.25), SessionState::Active);
        assert_eq!(CollisionScorer::tick(&mut session, 0.25), SessionState::Active);
        assert_eq!(session.score, 0.5);
    }

    #[test]
    fn test_crash_ends_session() {
        let mut session = Session::new(1);
        place(&mut session, 1.0, -19.0);
        assert_eq!(CollisionScorer::tick(&mut session, 0.1), SessionState::Ended);
        assert_eq!(session.state, SessionState::Ended);
        // Crashed car is left where it is
        assert_eq!(session.opponents.len(), 1);
    }

    #[test]
    fn test_touching_is_not_a_crash() {
        let mut session = Session::new(1);
        place(&mut session, 2.0, -20.0);
        place(&mut session, 0.0, -17.0);
        assert_eq!(CollisionScorer::tick(&mut session, 0.1), SessionState::Active);
    }

    #[test]
    fn test_first_overlap_in_registry_order_wins() {
        let mut session = Session::new(1);
        place(&mut session, 9.0, -20.0);
        let first = place(&mut session, 0.5, -20.0);
        let _second = place(&mut session, -0.5, -20.0);
        CollisionScorer::tick(&mut session, 0.1);
        assert_eq!(session.crashed_into, Some(first));
    }

    #[test]
    fn test_score_frozen_after_end() {
        let mut session = Session::new(1);
        place(&mut session, 0.0, -20.0);
        CollisionScorer::tick(&mut session, 1.0);
        let frozen = session.score;
        assert_eq!(CollisionScorer::tick(&mut session, 1.0), SessionState::Ended);
        assert_eq!(session.score, frozen);
    }
}

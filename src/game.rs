//! Game driver
//!
//! Binds a [`Session`] to a host engine: builds the scene, mirrors spawned and
//! retired opponents as host entities, and keeps the HUD in sync.

use std::collections::HashMap;

use crate::hud;
use crate::platform::{EntityHost, Host};
use crate::settings::Settings;
use crate::sim::{InputState, Session, SessionState, TickInput, TickReport, tick};
use crate::track;

/// Game instance holding all state
pub struct Game<H: EntityHost> {
    pub session: Session,
    pub settings: Settings,
    player_handle: H::Handle,
    opponent_handles: HashMap<u32, H::Handle>,
    scenery: Vec<H::Handle>,
}

impl<H: Host> Game<H> {
    /// Create the static scene, the player and any opponents already on track
    pub fn new(host: &mut H, session: Session, settings: Settings) -> Self {
        let scenery = track::scenery()
            .iter()
            .map(|spec| host.create(spec))
            .collect::<Vec<_>>();
        let player_handle = host.create(&track::vehicle_spec(&session.player));
        let opponent_handles = session
            .opponents
            .iter()
            .map(|vehicle| (vehicle.id, host.create(&track::vehicle_spec(vehicle))))
            .collect::<HashMap<_, _>>();
        host.place_camera(&track::camera_for(&session.player));
        log::info!(
            "{}: scene ready ({} static entities)",
            settings.window_title,
            scenery.len()
        );

        Self {
            session,
            settings,
            player_handle,
            opponent_handles,
            scenery,
        }
    }

    /// Sample the steering keys through the configured bindings
    pub fn read_controls(&self, host: &H) -> InputState {
        InputState {
            steer_left: host.is_held(&self.settings.keys.steer_left),
            steer_right: host.is_held(&self.settings.keys.steer_right),
        }
    }

    /// Run one frame against the host
    pub fn frame(&mut self, host: &mut H) -> TickReport {
        let was_active = self.session.is_active();
        let input = TickInput {
            now: host.now(),
            controls: self.read_controls(host),
        };
        let report = tick(&mut self.session, &input, host.frame_dt());

        if let Some(vehicle) = &report.spawned {
            let handle = host.create(&track::vehicle_spec(vehicle));
            self.opponent_handles.insert(vehicle.id, handle);
        }

        for vehicle in &report.retired {
            if let Some(handle) = self.opponent_handles.remove(&vehicle.id) {
                host.destroy(handle);
            }
        }

        if was_active {
            self.sync_positions(host);
        }

        host.show_score(&hud::score_line(self.session.score));
        if report.game_over {
            host.show_message(&hud::game_over_banner());
        }

        report
    }

    fn sync_positions(&self, host: &mut H) {
        host.set_position(self.player_handle, self.session.player.pos);
        for opponent in self.session.opponents.iter() {
            if let Some(&handle) = self.opponent_handles.get(&opponent.id) {
                host.set_position(handle, opponent.pos);
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.session.state == SessionState::Ended
    }

    pub fn player_handle(&self) -> H::Handle {
        self.player_handle
    }

    pub fn opponent_handle(&self, id: u32) -> Option<H::Handle> {
        self.opponent_handles.get(&id).copied()
    }

    pub fn scenery(&self) -> &[H::Handle] {
        &self.scenery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{EntityKind, FrameClock, HeadlessHost};
    use crate::sim::{NewOpponentRequest, VehicleKind};
    use crate::tuning::Tuning;
    use glam::Vec3;

    fn side_lane_tuning() -> Tuning {
        Tuning {
            spawn_lane_min: 8,
            spawn_lane_max: 8,
            ..Default::default()
        }
    }

    fn run(game: &mut Game<HeadlessHost>, host: &mut HeadlessHost, frames: usize) {
        for _ in 0..frames {
            game.frame(host);
            host.advance_frame();
        }
    }

    #[test]
    fn test_scene_setup() {
        let mut host = HeadlessHost::new(1.0 / 60.0);
        let game = Game::new(&mut host, Session::new(1), Settings::default());
        // Track, 30 markings, player
        assert_eq!(host.live(), 32);
        assert_eq!(game.scenery().len(), 31);
        let player = host.entity(game.player_handle()).unwrap();
        assert_eq!(player.kind, EntityKind::Player);
        let camera = host.camera.unwrap();
        assert_eq!(camera.position, Vec3::new(0.0, 20.0, -40.0));
        assert_eq!(camera.look_at, Vec3::new(0.0, 0.5, -20.0));
    }

    #[test]
    fn test_spawns_and_retires_mirror_host() {
        let mut host = HeadlessHost::new(0.5);
        let session = Session::with_tuning(3, &side_lane_tuning()).unwrap();
        let mut game = Game::new(&mut host, session, Settings::default());
        let base = host.live();

        // Spawn at t=0, next at t=2.5 (strictly after 2s)
        let report = game.frame(&mut host);
        let first = report.spawned.unwrap();
        assert_eq!(host.live(), base + 1);
        let handle = game.opponent_handle(first.id).unwrap();
        assert_eq!(host.entity(handle).map(|e| e.kind), Some(EntityKind::Opponent));

        host.advance_frame();
        run(&mut game, &mut host, 20);
        // Opponent moves 7.5 per frame: the first is long gone by now
        assert!(game.opponent_handle(first.id).is_none());
        assert_eq!(host.destroyed, host.created - host.live());
        assert_eq!(host.live(), base + game.session.opponents.len());
    }

    #[test]
    fn test_preplaced_opponent_is_mirrored() {
        let mut host = HeadlessHost::new(1.0);
        let mut session = Session::with_tuning(3, &side_lane_tuning()).unwrap();
        session.last_spawn = Some(0.0);
        let parked = session.spawn_opponent(NewOpponentRequest {
            position: Vec3::new(6.0, 0.5, 10.0),
            half_extents: Vec3::new(1.0, 0.5, 1.5),
        });
        let mut game = Game::new(&mut host, session, Settings::default());

        // Scenery, player and the parked opponent
        assert_eq!(host.live(), 33);
        let handle = game.opponent_handle(parked.id).unwrap();
        assert_eq!(host.entity(handle).map(|e| e.kind), Some(EntityKind::Opponent));

        game.frame(&mut host);
        assert_eq!(host.position(handle), Some(Vec3::new(6.0, 0.5, -5.0)));

        // 10 -> -50 takes four frames at 15/s; the fifth crosses the line.
        // The clock stays below the spawn delay so nothing new appears.
        for _ in 0..4 {
            game.frame(&mut host);
        }
        assert!(game.opponent_handle(parked.id).is_none());
        assert_eq!(host.position(handle), None);
        assert_eq!(host.destroyed, 1);
        assert_eq!(host.live(), 32);
    }

    #[test]
    fn test_positions_follow_session() {
        let mut host = HeadlessHost::new(0.1);
        let session = Session::with_tuning(3, &side_lane_tuning()).unwrap();
        let mut game = Game::new(&mut host, session, Settings::default());

        host.set_held("d", true);
        run(&mut game, &mut host, 5);
        let player = host.position(game.player_handle()).unwrap();
        assert_eq!(player, game.session.player.pos);
        assert!(player.x > 0.0);

        for opponent in game.session.opponents.iter() {
            let handle = game.opponent_handle(opponent.id).unwrap();
            assert_eq!(host.position(handle), Some(opponent.pos));
        }
    }

    #[test]
    fn test_rebound_keys() {
        let mut host = HeadlessHost::new(0.1);
        let mut settings = Settings::default();
        settings.keys.steer_left = "ArrowLeft".to_string();
        let mut game = Game::new(&mut host, Session::with_tuning(3, &side_lane_tuning()).unwrap(), settings);

        host.set_held("a", true);
        run(&mut game, &mut host, 1);
        assert_eq!(game.session.player.pos.x, 0.0);

        host.set_held("ArrowLeft", true);
        run(&mut game, &mut host, 1);
        assert!(game.session.player.pos.x < 0.0);
    }

    #[test]
    fn test_crash_shows_banner_once() {
        let mut host = HeadlessHost::new(0.1);
        let mut session = Session::new(1);
        session.last_spawn = Some(0.0);
        let blocker = session.spawn_opponent(NewOpponentRequest {
            position: Vec3::new(0.0, 0.5, -16.0),
            half_extents: Vec3::new(1.0, 0.5, 1.5),
        });
        assert_eq!(blocker.kind, VehicleKind::Opponent);
        let mut game = Game::new(&mut host, session, Settings::default());

        run(&mut game, &mut host, 10);
        assert!(game.is_over());
        assert_eq!(host.messages.len(), 1);
        assert_eq!(host.messages[0].text, "CRASH! GAME OVER");

        let score = host.score.clone().unwrap();
        run(&mut game, &mut host, 30);
        assert_eq!(host.messages.len(), 1);
        assert_eq!(host.score, Some(score));
        assert!(host.now() > 3.0);
    }
}

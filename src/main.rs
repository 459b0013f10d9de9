//! Lane Dodger entry point
//!
//! Runs a headless session driven by the autopilot and prints the final
//! snapshot. A real host engine would drive `Game::frame` from its own loop.
//!
//! Usage: `lane-dodger [seed] [tuning.json]`

use lane_dodger::platform::{FrameClock, HeadlessHost};
use lane_dodger::sim::Session;
use lane_dodger::{Game, Settings, Tuning, autopilot};

/// Simulated frame rate of the headless run
const FRAME_DT: f32 = 1.0 / 60.0;
/// Stop after this many frames even if the car never crashes
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Lane Dodger (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Seed must be an unsigned integer: {e}");
            std::process::exit(2);
        }
        None => 0x5EED,
    };
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let session = match Session::with_tuning(seed, &tuning) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let settings = Settings::default();
    let mut host = HeadlessHost::new(FRAME_DT);
    let mut game = Game::new(&mut host, session, settings);

    for _ in 0..MAX_FRAMES {
        let controls = autopilot::steer(&game.session, tuning.half_track_width);
        host.set_held(&game.settings.keys.steer_left, controls.steer_left);
        host.set_held(&game.settings.keys.steer_right, controls.steer_right);

        game.frame(&mut host);
        if game.is_over() {
            break;
        }
        host.advance_frame();
    }

    let snapshot = game.session.snapshot();
    log::info!(
        "Finished at t={:.2}s: {:?}, {} cars spawned, {} still on track",
        host.now(),
        snapshot.state,
        host.created - game.scenery().len() - 1,
        snapshot.opponents.len()
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

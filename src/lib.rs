//! Lane Dodger - A 3D arcade racer
//!
//! Core modules:
//! - `sim`: Simulation (spawning, movement, scoring, collisions)
//! - `platform`: Host engine collaborators (entities, input, clock, HUD)
//! - `game`: Binds a session to a host, frame by frame
//! - `tuning`: Data-driven game balance
//! - `settings`: Window and key binding preferences

pub mod autopilot;
pub mod error;
pub mod game;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod track;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use settings::{KeyBindings, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Seconds between opponent spawns
    pub const SPAWN_DELAY: f64 = 2.0;
    /// Inclusive lateral lane range for new opponents
    pub const SPAWN_LANE_MIN: i32 = -8;
    pub const SPAWN_LANE_MAX: i32 = 8;
    /// Forward coordinate where opponents appear
    pub const SPAWN_Z: f32 = 50.0;
    /// Opponents below this forward coordinate are retired (strict)
    pub const RETIRE_Z: f32 = -50.0;

    /// Speeds in units/second
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const OPPONENT_SPEED: f32 = 15.0;

    /// Player stays within [-HALF_TRACK_WIDTH, HALF_TRACK_WIDTH]
    pub const HALF_TRACK_WIDTH: f32 = 14.0;

    /// Full box size of every car (x, y, z)
    pub const VEHICLE_SIZE: [f32; 3] = [2.0, 1.0, 3.0];
    /// Cars ride at this height above the track plane
    pub const VEHICLE_Y: f32 = 0.5;
    /// Player starting forward coordinate
    pub const PLAYER_START_Z: f32 = -20.0;
}

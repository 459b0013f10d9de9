//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. Missing fields
//! fall back to the values in [`crate::consts`].

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds that must pass (strictly) between spawns
    pub spawn_delay: f64,
    /// Inclusive integer lane range for new opponents
    pub spawn_lane_min: i32,
    pub spawn_lane_max: i32,
    /// Forward coordinate of the spawn line
    pub spawn_z: f32,
    /// Forward coordinate of the retirement line
    pub retire_z: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub half_track_width: f32,
    /// Full box size shared by every car
    pub vehicle_size: Vec3,
    pub player_start: Vec3,
    /// Ride height of spawned opponents
    pub opponent_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_delay: SPAWN_DELAY,
            spawn_lane_min: SPAWN_LANE_MIN,
            spawn_lane_max: SPAWN_LANE_MAX,
            spawn_z: SPAWN_Z,
            retire_z: RETIRE_Z,
            player_speed: PLAYER_SPEED,
            opponent_speed: OPPONENT_SPEED,
            half_track_width: HALF_TRACK_WIDTH,
            vehicle_size: Vec3::from_array(VEHICLE_SIZE),
            player_start: Vec3::new(0.0, VEHICLE_Y, PLAYER_START_Z),
            opponent_y: VEHICLE_Y,
        }
    }
}

impl Tuning {
    /// Half of the car box, used for overlap tests
    pub fn vehicle_half_extents(&self) -> Vec3 {
        self.vehicle_size / 2.0
    }

    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the values describe a playable track
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("spawn_z", self.spawn_z),
            ("retire_z", self.retire_z),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
            ("half_track_width", self.half_track_width),
            ("opponent_y", self.opponent_y),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("{value} is not finite")));
            }
        }
        if !self.spawn_delay.is_finite() || self.spawn_delay < 0.0 {
            return Err(ConfigError::invalid(
                "spawn_delay",
                format!("{} must be a non-negative number of seconds", self.spawn_delay),
            ));
        }
        if self.spawn_lane_min > self.spawn_lane_max {
            return Err(ConfigError::invalid(
                "spawn_lane_min",
                format!("{} is above spawn_lane_max {}", self.spawn_lane_min, self.spawn_lane_max),
            ));
        }
        if self.retire_z >= self.spawn_z {
            return Err(ConfigError::invalid(
                "retire_z",
                format!("{} must be behind spawn_z {}", self.retire_z, self.spawn_z),
            ));
        }
        if self.player_speed <= 0.0 {
            return Err(ConfigError::invalid("player_speed", "must be positive"));
        }
        if self.opponent_speed <= 0.0 {
            return Err(ConfigError::invalid("opponent_speed", "must be positive"));
        }
        if self.half_track_width <= 0.0 {
            return Err(ConfigError::invalid("half_track_width", "must be positive"));
        }
        if !self.vehicle_size.is_finite() || self.vehicle_size.min_element() <= 0.0 {
            return Err(ConfigError::invalid(
                "vehicle_size",
                format!("{} needs three positive extents", self.vehicle_size),
            ));
        }
        if !self.player_start.is_finite() {
            return Err(ConfigError::invalid("player_start", "must be finite"));
        }
        Ok(())
    }
}

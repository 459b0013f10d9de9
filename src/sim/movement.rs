//! Per-frame movement
//!
//! Steers the player across the track and drives opponents toward it.
//! Opponents that pass the retirement line are collected during the scan and
//! removed only after it finishes.

use serde::{Deserialize, Serialize};

use super::state::{OpponentRegistry, Vehicle};
use crate::tuning::Tuning;

/// Steering keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub steer_left: bool,
    pub steer_right: bool,
}

impl InputState {
    /// -1, 0 or +1 along the lateral axis
    #[inline]
    pub fn axis(&self) -> f32 {
        f32::from(u8::from(self.steer_right)) - f32::from(u8::from(self.steer_left))
    }
}

/// Opponents removed this frame, handed back so the host can free handles
pub type RetiredSet = Vec<Vehicle>;

#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub half_track_width: f32,
    /// Opponents strictly below this forward coordinate are retired
    pub retire_z: f32,
}

impl MovementIntegrator {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            player_speed: tuning.player_speed,
            opponent_speed: tuning.opponent_speed,
            half_track_width: tuning.half_track_width,
            retire_z: tuning.retire_z,
        }
    }

    /// Keep a lateral coordinate on the drivable surface
    #[inline]
    pub fn clamp_lateral(&self, x: f32) -> f32 {
        x.clamp(-self.half_track_width, self.half_track_width)
    }

    /// Advance the player and every opponent by `dt` seconds
    pub fn advance(
        &self,
        player: &mut Vehicle,
        opponents: &mut OpponentRegistry,
        input: InputState,
        dt: f32,
    ) -> RetiredSet {
        player.pos.x += input.axis() * dt * self.player_speed;
        player.pos.x = self.clamp_lateral(player.pos.x);

        let mut retiring = Vec::new();
        for opponent in opponents.iter_mut() {
            opponent.pos.z -= dt * self.opponent_speed;
            if opponent.pos.z < self.retire_z {
                retiring.push(opponent.id);
            }
        }

        let retired = opponents.remove_ids(&retiring);
        for vehicle in &retired {
            log::debug!("Retired opponent {} at z={:.1}", vehicle.id, vehicle.pos.z);
        }
        retired
    }
}

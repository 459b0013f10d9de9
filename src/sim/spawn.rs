//! Opponent spawning
//!
//! Decides whether enough wall-clock time has passed to put another car on
//! the spawn line. The decision is pure: the caller records the spawn time.

use glam::Vec3;
use rand::Rng;

use crate::tuning::Tuning;

/// Where and how big the next opponent should be
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewOpponentRequest {
    pub position: Vec3,
    pub half_extents: Vec3,
}

/// True once strictly more than `delay` seconds separate `now` and `last_spawn`
#[inline]
pub fn spawn_due(now: f64, last_spawn: f64, delay: f64) -> bool {
    now - last_spawn > delay
}

#[derive(Debug, Clone)]
pub struct SpawnController {
    pub delay: f64,
    pub lane_min: i32,
    pub lane_max: i32,
    pub spawn_z: f32,
    pub ride_height: f32,
    pub half_extents: Vec3,
}

impl SpawnController {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            delay: tuning.spawn_delay,
            lane_min: tuning.spawn_lane_min,
            lane_max: tuning.spawn_lane_max,
            spawn_z: tuning.spawn_z,
            ride_height: tuning.opponent_y,
            half_extents: tuning.vehicle_half_extents(),
        }
    }

    /// Request one opponent on a random integer lane if the delay has elapsed
    pub fn maybe_spawn<R: Rng>(
        &self,
        now: f64,
        last_spawn: f64,
        rng: &mut R,
    ) -> Option<NewOpponentRequest> {
        if !spawn_due(now, last_spawn, self.delay) {
            return None;
        }
        let lane = rng.random_range(self.lane_min..=self.lane_max);
        Some(NewOpponentRequest {
            position: Vec3::new(lane as f32, self.ride_height, self.spawn_z),
            half_extents: self.half_extents,
        })
    }
}

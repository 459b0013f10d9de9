//! Session state and core simulation types
//!
//! Everything one play-through mutates lives in [`Session`]; there are no
//! process-wide globals.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::movement::MovementIntegrator;
use super::spawn::{NewOpponentRequest, SpawnController};
use crate::error::Result;
use crate::tuning::Tuning;

/// Whether the session is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Cars are moving and the score is counting
    Active,
    /// The player crashed; nothing changes from here on
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Player,
    Opponent,
}

/// A car on the track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub kind: VehicleKind,
    /// x is lateral, y is height, z is forward (opponents drive toward -z)
    pub pos: Vec3,
    pub half_extents: Vec3,
}

impl Vehicle {
    pub fn new(id: u32, kind: VehicleKind, pos: Vec3, half_extents: Vec3) -> Self {
        Self {
            id,
            kind,
            pos,
            half_extents,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.half_extents)
    }

    /// Full box size, as a host would scale a unit cube
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

/// Ordered collection of live opponents, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct OpponentRegistry {
    vehicles: Vec<Vehicle>,
}

impl OpponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an opponent. Returns false (and keeps the registry unchanged) if
    /// an opponent with the same id is already present.
    pub fn insert(&mut self, vehicle: Vehicle) -> bool {
        if self.contains(vehicle.id) {
            log::warn!("Rejected duplicate opponent id {}", vehicle.id);
            return false;
        }
        self.vehicles.push(vehicle);
        true
    }

    pub fn contains(&self, id: u32) -> bool {
        self.vehicles.iter().any(|v| v.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    /// Remove every opponent whose id is listed, returning them in registry
    /// order. Unknown ids are ignored, so each entry leaves at most once.
    pub fn remove_ids(&mut self, ids: &[u32]) -> Vec<Vehicle> {
        if ids.is_empty() {
            return Vec::new();
        }
        let (removed, kept): (Vec<Vehicle>, Vec<Vehicle>) = std::mem::take(&mut self.vehicles)
            .into_iter()
            .partition(|v| ids.contains(&v.id));
        self.vehicles = kept;
        removed
    }
}

/// Serializable view of a session, for HUDs and logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub state: SessionState,
    pub score: f32,
    pub frames: u64,
    pub player: Vehicle,
    pub opponents: Vec<Vehicle>,
}

/// One play-through
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducible spawn lanes
    pub seed: u64,
    pub state: SessionState,
    /// Seconds survived
    pub score: f32,
    /// Clock reading of the most recent spawn (None until the first one)
    pub last_spawn: Option<f64>,
    pub player: Vehicle,
    pub opponents: OpponentRegistry,
    /// Frames simulated while Active
    pub frames: u64,
    /// Id of the opponent that ended the run
    pub crashed_into: Option<u32>,
    pub(crate) spawner: SpawnController,
    pub(crate) integrator: MovementIntegrator,
    pub(crate) game_over_announced: bool,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Session {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, &Tuning::default())
    }

    /// Create a session after checking the tuning describes a playable track
    pub fn with_tuning(seed: u64, tuning: &Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: &Tuning) -> Self {
        let integrator = MovementIntegrator::from_tuning(tuning);
        let mut start = tuning.player_start;
        start.x = integrator.clamp_lateral(start.x);

        log::info!("Session started (seed {seed})");
        Self {
            seed,
            state: SessionState::Active,
            score: 0.0,
            last_spawn: None,
            player: Vehicle::new(0, VehicleKind::Player, start, tuning.vehicle_half_extents()),
            opponents: OpponentRegistry::new(),
            frames: 0,
            crashed_into: None,
            spawner: SpawnController::from_tuning(tuning),
            integrator,
            game_over_announced: false,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Allocate a new entity ID (0 is the player)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Turn a spawn request into a registered opponent
    pub fn spawn_opponent(&mut self, request: NewOpponentRequest) -> Vehicle {
        let id = self.next_entity_id();
        let vehicle = Vehicle::new(id, VehicleKind::Opponent, request.position, request.half_extents);
        let inserted = self.opponents.insert(vehicle.clone());
        debug_assert!(inserted, "entity id {id} allocated twice");
        vehicle
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            state: self.state,
            score: self.score,
            frames: self.frames,
            player: self.player.clone(),
            opponents: self.opponents.iter().cloned().collect(),
        }
    }
}

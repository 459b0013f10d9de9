//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time comes in as `now` and `dt` from the host
//! - Seeded RNG only (spawn lanes)
//! - Stable iteration order (registry insertion order)

pub mod bounds;
pub mod collision;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use collision::{CollisionScorer, first_overlap};
pub use movement::{InputState, MovementIntegrator, RetiredSet};
pub use spawn::{NewOpponentRequest, SpawnController, spawn_due};
pub use state::{OpponentRegistry, Session, SessionState, Snapshot, Vehicle, VehicleKind};
pub use tick::{TickInput, TickReport, sanitize_dt, tick};

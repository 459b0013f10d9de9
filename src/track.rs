//! Static scene layout: track surface, lane markings, camera
//!
//! Built once by the host at session start. None of it takes part in the
//! simulation.

use glam::{Vec2, Vec3};

use crate::platform::{Color, EntityKind, EntitySpec, Model, VisualStyle};
use crate::sim::{Vehicle, VehicleKind};

/// Track plane size (x, y, z)
pub const TRACK_SIZE: Vec3 = Vec3::new(20.0, 1.0, 100.0);
pub const TRACK_TEXTURE: &str = "white_cube";
pub const TRACK_TEXTURE_SCALE: Vec2 = Vec2::new(10.0, 50.0);

/// Center-line dashes: one every `MARKING_SPACING` units over [start, end)
pub const MARKING_START_Z: i32 = -50;
pub const MARKING_END_Z: i32 = 100;
pub const MARKING_SPACING: usize = 5;
pub const MARKING_SIZE: Vec3 = Vec3::new(0.1, 0.1, 3.0);
pub const MARKING_HEIGHT: f32 = 0.1;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 20.0, -40.0);

/// Fixed camera placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

pub fn camera_for(player: &Vehicle) -> CameraRig {
    CameraRig {
        position: CAMERA_POSITION,
        look_at: player.pos,
    }
}

pub fn track_surface() -> EntitySpec {
    EntitySpec {
        kind: EntityKind::Track,
        position: Vec3::ZERO,
        scale: TRACK_SIZE,
        style: VisualStyle {
            model: Model::Plane,
            color: Color::White,
            texture: Some(TRACK_TEXTURE.to_string()),
            texture_scale: Some(TRACK_TEXTURE_SCALE),
        },
        collider: false,
    }
}

pub fn road_markings() -> Vec<EntitySpec> {
    (MARKING_START_Z..MARKING_END_Z)
        .step_by(MARKING_SPACING)
        .map(|z| EntitySpec {
            kind: EntityKind::RoadMarking,
            position: Vec3::new(0.0, MARKING_HEIGHT, z as f32),
            scale: MARKING_SIZE,
            style: VisualStyle::solid(Model::Cube, Color::Yellow),
            collider: false,
        })
        .collect()
}

/// The whole static scene, track first
pub fn scenery() -> Vec<EntitySpec> {
    let mut specs = vec![track_surface()];
    specs.extend(road_markings());
    specs
}

/// Entity for a car: blue for the player, red for opponents
pub fn vehicle_spec(vehicle: &Vehicle) -> EntitySpec {
    let (kind, color) = match vehicle.kind {
        VehicleKind::Player => (EntityKind::Player, Color::Blue),
        VehicleKind::Opponent => (EntityKind::Opponent, Color::Red),
    };
    EntitySpec {
        kind,
        position: vehicle.pos,
        scale: vehicle.size(),
        style: VisualStyle::solid(Model::Cube, color),
        collider: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Session;

    #[test]
    fn test_road_markings() {
        let markings = road_markings();
        assert_eq!(markings.len(), 30);
        assert_eq!(markings.first().map(|m| m.position.z), Some(-50.0));
        assert_eq!(markings.last().map(|m| m.position.z), Some(95.0));
        assert!(markings.iter().all(|m| m.style.color == Color::Yellow));
    }

    #[test]
    fn test_scenery_starts_with_track() {
        let scene = scenery();
        assert_eq!(scene.len(), 31);
        assert_eq!(scene[0].kind, EntityKind::Track);
        assert_eq!(scene[0].style.texture.as_deref(), Some("white_cube"));
    }

    #[test]
    fn test_vehicle_spec_colors() {
        let session = Session::new(1);
        let spec = vehicle_spec(&session.player);
        assert_eq!(spec.kind, EntityKind::Player);
        assert_eq!(spec.style.color, Color::Blue);
        assert_eq!(spec.scale, Vec3::new(2.0, 1.0, 3.0));
        assert!(spec.collider);

        let camera = camera_for(&session.player);
        assert_eq!(camera.look_at, Vec3::new(0.0, 0.5, -20.0));
    }
}

//! Platform abstraction layer
//!
//! The host engine owns rendering, windowing and input devices. The game
//! talks to it only through these traits:
//! - Entities (create/destroy/move render objects)
//! - Input (held keys)
//! - Time (wall clock and frame delta)
//! - HUD text

pub mod headless;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::hud::HudText;
use crate::track::CameraRig;

pub use headless::HeadlessHost;

/// What an entity represents in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Opponent,
    Track,
    RoadMarking,
}

/// Primitive mesh to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    Cube,
    Plane,
}

/// Named palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Red,
    Yellow,
}

impl Color {
    /// Linear RGB in [0, 1]
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Color::White => [1.0, 1.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0],
            Color::Yellow => [1.0, 1.0, 0.0],
        }
    }
}

/// How the host should draw an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub model: Model,
    pub color: Color,
    /// Optional texture name and tiling
    pub texture: Option<String>,
    pub texture_scale: Option<Vec2>,
}

impl VisualStyle {
    pub fn solid(model: Model, color: Color) -> Self {
        Self {
            model,
            color,
            texture: None,
            texture_scale: None,
        }
    }
}

/// Everything a host needs to create one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub position: Vec3,
    /// Full size along each axis
    pub scale: Vec3,
    pub style: VisualStyle,
    /// Whether the host should attach a box collider
    pub collider: bool,
}

/// Render/entity collaborator
pub trait EntityHost {
    type Handle: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    fn create(&mut self, spec: &EntitySpec) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
    fn set_position(&mut self, handle: Self::Handle, position: Vec3);
    fn position(&self, handle: Self::Handle) -> Option<Vec3>;
    /// Full size of the entity's box
    fn bounds(&self, handle: Self::Handle) -> Option<Vec3>;
    /// Point the scene camera
    fn place_camera(&mut self, rig: &CameraRig);
}

/// Input collaborator
pub trait KeyInput {
    /// Whether `key` is held down this frame
    fn is_held(&self, key: &str) -> bool;
}

/// Clock collaborator
pub trait FrameClock {
    /// Monotonic wall-clock seconds
    fn now(&self) -> f64;
    /// Seconds elapsed since the previous frame
    fn frame_dt(&self) -> f32;
}

/// Display collaborator
pub trait HudDisplay {
    /// Replace the score line (called every frame)
    fn show_score(&mut self, text: &HudText);
    /// Show a one-off message
    fn show_message(&mut self, text: &HudText);
}

/// Convenience bound for a complete host
pub trait Host: EntityHost + KeyInput + FrameClock + HudDisplay {}

impl<T: EntityHost + KeyInput + FrameClock + HudDisplay> Host for T {}

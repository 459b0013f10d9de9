//! Axis-aligned bounding boxes
//!
//! Cars never rotate, so a center plus half-extents is all the collision
//! geometry the game needs.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    /// Half of the box size on each axis (all positive)
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Strict overlap on all three axes. Boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        delta.cmplt(reach).all()
    }
}

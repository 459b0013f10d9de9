//! Headless host for tests and the native demo
//!
//! Keeps entities in a map, steps a fake clock by a fixed frame time and
//! records every HUD update instead of drawing it.

use std::collections::{HashMap, HashSet};

use glam::Vec3;

use super::{EntityHost, EntitySpec, FrameClock, HudDisplay, KeyInput};
use crate::hud::HudText;
use crate::track::CameraRig;

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    now: f64,
    frame_dt: f32,
    held: HashSet<String>,
    entities: HashMap<u64, EntitySpec>,
    next_handle: u64,
    /// Total create/destroy calls
    pub created: usize,
    pub destroyed: usize,
    /// Latest camera placement
    pub camera: Option<CameraRig>,
    /// Latest score line shown
    pub score: Option<HudText>,
    /// Every one-off message, in order
    pub messages: Vec<HudText>,
}

impl HeadlessHost {
    /// Host whose clock starts at zero and advances `frame_dt` per frame
    pub fn new(frame_dt: f32) -> Self {
        Self {
            now: 0.0,
            frame_dt,
            held: HashSet::new(),
            entities: HashMap::new(),
            next_handle: 1,
            created: 0,
            destroyed: 0,
            camera: None,
            score: None,
            messages: Vec::new(),
        }
    }

    /// Move the clock forward one frame
    pub fn advance_frame(&mut self) {
        self.now += f64::from(self.frame_dt);
    }

    pub fn set_held(&mut self, key: &str, held: bool) {
        if held {
            self.held.insert(key.to_string());
        } else {
            self.held.remove(key);
        }
    }

    /// Live entities
    pub fn live(&self) -> usize {
        self.entities.len()
    }

    pub fn entity(&self, handle: u64) -> Option<&EntitySpec> {
        self.entities.get(&handle)
    }
}

impl EntityHost for HeadlessHost {
    type Handle = u64;

    fn create(&mut self, spec: &EntitySpec) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.entities.insert(handle, spec.clone());
        self.created += 1;
        handle
    }

    fn destroy(&mut self, handle: u64) {
        if self.entities.remove(&handle).is_some() {
            self.destroyed += 1;
        } else {
            log::warn!("Destroy of unknown handle {handle}");
        }
    }

    fn set_position(&mut self, handle: u64, position: Vec3) {
        if let Some(spec) = self.entities.get_mut(&handle) {
            spec.position = position;
        }
    }

    fn position(&self, handle: u64) -> Option<Vec3> {
        self.entities.get(&handle).map(|spec| spec.position)
    }

    fn bounds(&self, handle: u64) -> Option<Vec3> {
        self.entities.get(&handle).map(|spec| spec.scale)
    }

    fn place_camera(&mut self, rig: &CameraRig) {
        self.camera = Some(*rig);
    }
}

impl KeyInput for HeadlessHost {
    fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

impl FrameClock for HeadlessHost {
    fn now(&self) -> f64 {
        self.now
    }

    fn frame_dt(&self) -> f32 {
        self.frame_dt
    }
}

impl HudDisplay for HeadlessHost {
    fn show_score(&mut self, text: &HudText) {
        self.score = Some(text.clone());
    }

    fn show_message(&mut self, text: &HudText) {
        log::info!("HUD: {}", text.text);
        self.messages.push(text.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track;

    #[test]
    fn test_entity_lifecycle() {
        let mut host = HeadlessHost::new(0.5);
        let handle = host.create(&track::track_surface());
        assert_eq!(host.live(), 1);
        host.set_position(handle, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(host.position(handle), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(host.bounds(handle), Some(track::TRACK_SIZE));

        host.destroy(handle);
        host.destroy(handle);
        assert_eq!(host.live(), 0);
        assert_eq!(host.destroyed, 1);
        assert_eq!(host.position(handle), None);
    }

    #[test]
    fn test_clock_and_keys() {
        let mut host = HeadlessHost::new(0.5);
        host.advance_frame();
        host.advance_frame();
        assert_eq!(host.now(), 1.0);

        host.set_held("a", true);
        assert!(host.is_held("a"));
        assert!(!host.is_held("d"));
        host.set_held("a", false);
        assert!(!host.is_held("a"));
    }
}

//! Window and control preferences
//!
//! Handed to the host engine; the simulation never reads them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which host keys steer the car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub steer_left: String,
    pub steer_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            steer_left: "a".to_string(),
            steer_right: "d".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub borderless: bool,
    pub fullscreen: bool,

    // === Controls ===
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "3D F1 Racer".to_string(),
            borderless: false,
            fullscreen: false,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        if settings.keys.steer_left.is_empty() || settings.keys.steer_right.is_empty() {
            return Err(ConfigError::invalid("keys", "bindings cannot be empty"));
        }
        if settings.keys.steer_left == settings.keys.steer_right {
            return Err(ConfigError::invalid(
                "keys",
                format!("'{}' is bound to both directions", settings.keys.steer_left),
            ));
        }
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

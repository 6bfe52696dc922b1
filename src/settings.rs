//! Host preferences
//!
//! Not part of the simulation: these only change what the host draws or plays.
//! Console commands flip them at runtime.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Background music
    pub music: bool,
    /// Controller rumble
    pub vibration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            music: true,
            vibration: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring unreadable settings ({}), using defaults", err);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Whether the host should act on `event` (rumble is dropped when vibration is off)
    pub fn wants(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::Vibrate(_) => self.vibration,
            _ => true,
        }
    }
}

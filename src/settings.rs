//! Game settings and preferences
//!
//! Read from a JSON file at startup. A missing or unreadable file falls back
//! to defaults; missing fields take their default values.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "flappy-settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the best score lives
    pub best_score_path: PathBuf,
    /// Fixed RNG seed (time-based when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Frontend ===
    /// Pause automatically when the terminal loses focus
    pub pause_on_blur: bool,
    /// World units per terminal column
    pub cell_width: f32,
    /// World units per terminal row
    pub cell_height: f32,
    /// Send log output here instead of stderr
    pub log_file: Option<PathBuf>,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            best_score_path: PathBuf::from("highscore.txt"),
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            pause_on_blur: true,
            cell_width: 10.0,
            cell_height: 20.0,
            log_file: None,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// World units covered by one terminal cell
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.cell_width.max(1.0), self.cell_height.max(1.0))
    }

    /// Parse settings JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Could not read {}: {}", path.display(), e);
                }
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

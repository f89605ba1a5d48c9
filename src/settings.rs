//! Runner settings
//!
//! Persisted as JSON next to the binary; missing fields take their defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FINISH_DELAY, SIM_DT};

/// Settings for the headless level runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the parser RNG (coin phases)
    pub seed: u64,
    /// Simulation timestep in seconds
    pub dt: f32,
    /// Give up on a level after this many ticks
    pub max_ticks_per_level: u32,
    /// Grace period between a decided status and the level finishing
    pub finish_delay: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            dt: SIM_DT,
            // One minute at 60 Hz
            max_ticks_per_level: 3600,
            finish_delay: FINISH_DELAY,
        }
    }
}

impl Settings {
    /// Timestep actually used (falls back to `SIM_DT` if unusable)
    pub fn effective_dt(&self) -> f32 {
        if self.dt.is_finite() && self.dt > 0.0 {
            self.dt
        } else {
            SIM_DT
        }
    }

    /// Grace period actually used (falls back to `FINISH_DELAY` if unusable)
    pub fn effective_finish_delay(&self) -> f32 {
        if self.finish_delay.is_finite() && self.finish_delay >= 0.0 {
            self.finish_delay
        } else {
            FINISH_DELAY
        }
    }

    /// Load settings from a JSON file, using defaults if it is missing or
    /// unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

// settings.rs - User Settings
//
// Read-only configuration loaded from the platform config directory.
// Every field has a default, so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::export::ExportConfig;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generated script parameters
    pub export: ExportConfig,
    /// Edit-mode hit radius in pixels
    pub pick_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            pick_radius: constants::marker::PICK_RADIUS,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("LedPainter")
            .join("settings.json")
    }

    /// Load from the config directory, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            info!("No settings at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                error!("{:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("Rejected settings {}", path.display()))?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.pick_radius.is_finite() && self.pick_radius >= 0.0,
            "Invalid pick radius {}: expected a non-negative number of pixels",
            self.pick_radius
        );
        self.export.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ledpainter_settings_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = scratch("partial", r#"{ "export": { "data_pin": "D12" } }"#);
        let settings = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(settings.export.data_pin, "D12");
        assert_eq!(settings.export.brightness, 0.2);
        assert_eq!(settings.export.output_path, PathBuf::from("led_show_code.py"));
        assert_eq!(settings.pick_radius, constants::marker::PICK_RADIUS);
    }

    #[test]
    fn full_file_round_trips() {
        let original = Settings {
            export: ExportConfig {
                output_path: PathBuf::from("show.py"),
                data_pin: "D5".to_string(),
                brightness: 0.8,
                frame_interval_secs: 0.1,
            },
            pick_radius: 6.0,
        };
        let path = scratch("full", &serde_json::to_string_pretty(&original).unwrap());
        let loaded = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, original);
    }

    #[test]
    fn negative_pick_radius_is_rejected() {
        let path = scratch("radius", r#"{ "pick_radius": -4.0 }"#);
        let err = Settings::load_from(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(format!("{err:#}").contains("pick radius"));
    }

    #[test]
    fn hostile_data_pin_is_rejected() {
        let path = scratch("pin", r#"{ "export": { "data_pin": "D18); import os #" } }"#);
        let err = Settings::load_from(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(format!("{err:#}").contains("data pin"));
    }

    #[test]
    fn garbage_is_an_error() {
        let path = scratch("garbage", "not json");
        let result = Settings::load_from(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }
}

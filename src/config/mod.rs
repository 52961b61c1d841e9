// SPDX-License-Identifier: MPL-2.0
//! This module handles the reel's tunable settings, including loading and saving
//! them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.btn_scroll_step = Some(200.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.btn_scroll_step, Some(200.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::slider::{Align, HoverSensitivity, ScrollStep, WheelSensitivity};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wheel_scroll_sensitivity: Option<f32>,
    #[serde(default)]
    pub btn_scroll_step: Option<f32>,
    #[serde(default)]
    pub on_hover_scroll_sensitivity: Option<f32>,
    #[serde(default)]
    pub image_spacing: Option<f32>,
    #[serde(default)]
    pub align: Option<Align>,
    /// Give up on an image set after this many milliseconds. Unset means a
    /// stuck image keeps the reel unloaded indefinitely.
    #[serde(default)]
    pub load_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wheel_scroll_sensitivity: Some(DEFAULT_WHEEL_SENSITIVITY),
            btn_scroll_step: Some(DEFAULT_BUTTON_STEP),
            on_hover_scroll_sensitivity: Some(DEFAULT_HOVER_SENSITIVITY),
            image_spacing: Some(DEFAULT_IMAGE_SPACING),
            align: Some(Align::Top),
            load_timeout_ms: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn wheel_sensitivity(&self) -> WheelSensitivity {
        self.wheel_scroll_sensitivity
            .map(WheelSensitivity::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn button_step(&self) -> ScrollStep {
        self.btn_scroll_step.map(ScrollStep::new).unwrap_or_default()
    }

    #[must_use]
    pub fn hover_sensitivity(&self) -> HoverSensitivity {
        self.on_hover_scroll_sensitivity
            .map(HoverSensitivity::new)
            .unwrap_or_default()
    }

    /// Spacing in pixels; negative or non-finite values fall back to zero.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.image_spacing
            .map_or(DEFAULT_IMAGE_SPACING, sanitize_spacing)
    }

    /// Per-image load limit. Zero means no limit, like leaving it unset.
    #[must_use]
    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
    }
}

/// Replaces negative or non-finite spacing with the default.
#[must_use]
pub fn sanitize_spacing(spacing: f32) -> f32 {
    if spacing.is_finite() && spacing > 0.0 {
        spacing
    } else {
        DEFAULT_IMAGE_SPACING
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring invalid settings at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            wheel_scroll_sensitivity: Some(2.5),
            btn_scroll_step: Some(80.0),
            on_hover_scroll_sensitivity: Some(10.0),
            image_spacing: Some(12.0),
            align: Some(Align::Center),
            load_timeout_ms: Some(3_000),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let loaded: Config = toml::from_str("btn_scroll_step = 42.0").expect("valid toml");
        assert_eq!(loaded.btn_scroll_step, Some(42.0));
        assert!(loaded.align.is_none());
        assert_eq!(loaded.wheel_sensitivity().value(), DEFAULT_WHEEL_SENSITIVITY);
    }

    #[test]
    fn default_config_uses_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.button_step().value(), 150.0);
        assert_eq!(config.hover_sensitivity().value(), 25.0);
        assert_eq!(config.wheel_sensitivity().value(), 1.0);
        assert!(config.load_timeout().is_none());
    }

    #[test]
    fn negative_spacing_falls_back_to_zero() {
        let config = Config {
            image_spacing: Some(-5.0),
            ..Config::default()
        };
        assert_eq!(config.spacing(), 0.0);
    }

    #[test]
    fn zero_load_timeout_means_no_limit() {
        let config = Config {
            load_timeout_ms: Some(0),
            ..Config::default()
        };
        assert!(config.load_timeout().is_none());

        let config = Config {
            load_timeout_ms: Some(1),
            ..Config::default()
        };
        assert_eq!(config.load_timeout(), Some(Duration::from_millis(1)));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery files for the demo viewer.
//!
//! A gallery is a TOML document describing the track and its slides:
//!
//! ```toml
//! height = "320px"
//! mode = "mosaic"
//! border = 2
//!
//! [[images]]
//! source = "photos/harbour.jpg"
//! proportional_height = 80
//! pos_x = 0
//! pos_y = 12
//! ```

use crate::config::DEFAULT_BORDER;
use crate::domain::slider::{LayoutMode, SliderImage};
use crate::error::{Error, Result};
use crate::ui::slider::SliderSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_HEIGHT: &str = "300px";

fn default_height() -> String {
    DEFAULT_HEIGHT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default)]
    pub mode: LayoutMode,
    #[serde(default)]
    pub border: f32,
    #[serde(default)]
    pub images: Vec<SliderImage>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            height: default_height(),
            mode: LayoutMode::default(),
            border: DEFAULT_BORDER,
            images: Vec::new(),
        }
    }
}

impl Gallery {
    /// Reads a gallery file. Unlike settings, a malformed gallery is an
    /// error: there is nothing sensible to show in its place.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
    }

    /// Slider settings for this gallery before applying user tunables.
    #[must_use]
    pub fn settings(&self) -> SliderSettings {
        SliderSettings::new(self.images.clone(), self.height.clone(), self.mode).border(self.border)
    }
}

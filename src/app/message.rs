// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::slider;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Slider(slider::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Gallery file describing the slides to show.
    pub gallery_path: Option<PathBuf>,
    /// Settings file overriding the per-user `settings.toml`.
    pub config_path: Option<PathBuf>,
}

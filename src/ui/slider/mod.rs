// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling image slider.
//!
//! [`component::State`] wires the dimension loader, layout calculator and the
//! three input channels (wheel, edge hover, buttons) to one scroll offset.
//! [`SliderSettings`] is the host-facing configuration surface.

pub mod component;
mod track;

pub use component::{Effect, Message, ScrollState, State, TriggerHandles};

use crate::config::{sanitize_spacing, Config, DEFAULT_BORDER, DEFAULT_IMAGE_SPACING};
use crate::domain::slider::{
    Align, HoverSensitivity, LayoutMode, ScrollStep, SliderImage, WheelSensitivity,
};
use crate::layout::{LayoutParams, TrackHeight};
use std::time::Duration;

/// Everything a host configures on a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSettings {
    pub images: Vec<SliderImage>,
    /// CSS-style track height such as `"300px"`.
    pub height: String,
    pub mode: LayoutMode,
    /// Gap between slides, linear mode only.
    pub image_spacing: f32,
    /// Vertical placement, linear mode only.
    pub align: Align,
    /// Border width of every slide, used for width compensation.
    pub border: f32,
    pub wheel_sensitivity: WheelSensitivity,
    pub button_step: ScrollStep,
    pub hover_sensitivity: HoverSensitivity,
    pub load_timeout: Option<Duration>,
}

impl SliderSettings {
    #[must_use]
    pub fn new(images: Vec<SliderImage>, height: impl Into<String>, mode: LayoutMode) -> Self {
        Self {
            images,
            height: height.into(),
            mode,
            image_spacing: DEFAULT_IMAGE_SPACING,
            align: Align::default(),
            border: DEFAULT_BORDER,
            wheel_sensitivity: WheelSensitivity::default(),
            button_step: ScrollStep::default(),
            hover_sensitivity: HoverSensitivity::default(),
            load_timeout: None,
        }
    }

    /// Applies the tunables of a persisted [`Config`].
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.image_spacing = config.spacing();
        self.align = config.align.unwrap_or_default();
        self.wheel_sensitivity = config.wheel_sensitivity();
        self.button_step = config.button_step();
        self.hover_sensitivity = config.hover_sensitivity();
        self.load_timeout = config.load_timeout();
        self
    }

    /// Negative or non-finite spacing falls back to zero.
    #[must_use]
    pub fn image_spacing(mut self, spacing: f32) -> Self {
        self.image_spacing = sanitize_spacing(spacing);
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn wheel_sensitivity(mut self, sensitivity: WheelSensitivity) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn button_step(mut self, step: ScrollStep) -> Self {
        self.button_step = step;
        self
    }

    #[must_use]
    pub fn hover_sensitivity(mut self, sensitivity: HoverSensitivity) -> Self {
        self.hover_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn load_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.load_timeout = timeout;
        self
    }

    #[must_use]
    pub fn track_height(&self) -> TrackHeight {
        TrackHeight::parse(&self.height)
    }

    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            track_height: self.track_height(),
            mode: self.mode,
            spacing: sanitize_spacing(self.image_spacing),
            border: self.border,
            align: self.align,
        }
    }

    /// Whether switching to `other` requires resolving dimensions again.
    #[must_use]
    pub fn needs_reload(&self, other: &SliderSettings) -> bool {
        self.images != other.images
            || self.height != other.height
            || self.mode != other.mode
            || self.image_spacing != other.image_spacing
            || self.border != other.border
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn settings() -> SliderSettings {
        SliderSettings::new(vec![SliderImage::new("a.png")], "200px", LayoutMode::Linear)
    }

    #[test]
    fn defaults_match_documented_values() {
        let settings = settings();
        assert_abs_diff_eq!(settings.wheel_sensitivity.value(), 1.0);
        assert_abs_diff_eq!(settings.button_step.value(), 150.0);
        assert_abs_diff_eq!(settings.hover_sensitivity.value(), 25.0);
        assert_abs_diff_eq!(settings.image_spacing, 0.0);
        assert_eq!(settings.align, Align::Top);
        assert_eq!(settings.load_timeout, None);
    }

    #[test]
    fn layout_params_parse_height() {
        let params = settings().border(2.0).image_spacing(10.0).layout_params();
        assert_abs_diff_eq!(params.track_height.pixels(), 200.0);
        assert_abs_diff_eq!(params.spacing, 10.0);
        assert_abs_diff_eq!(params.border, 2.0);
    }

    #[test]
    fn invalid_spacing_is_sanitized() {
        assert_abs_diff_eq!(settings().image_spacing(-12.0).image_spacing, 0.0);
        assert_abs_diff_eq!(settings().image_spacing(f32::NAN).image_spacing, 0.0);

        let raw = SliderSettings {
            image_spacing: -8.0,
            ..settings()
        };
        assert_abs_diff_eq!(raw.layout_params().spacing, 0.0);
    }

    #[test]
    fn geometry_inputs_require_reload() {
        let base = settings();
        assert!(base.needs_reload(&base.clone().border(1.0)));
        assert!(base.needs_reload(&base.clone().image_spacing(4.0)));
        assert!(base.needs_reload(&SliderSettings {
            height: "300px".into(),
            ..base.clone()
        }));
    }

    #[test]
    fn tunables_do_not_require_reload() {
        let base = settings();
        assert!(!base.needs_reload(&base.clone().align(Align::Bottom)));
        assert!(!base.needs_reload(&base.clone().button_step(ScrollStep::new(40.0))));
    }

    #[test]
    fn config_overrides_tunables() {
        let config = Config {
            btn_scroll_step: Some(80.0),
            align: Some(Align::Center),
            load_timeout_ms: Some(1500),
            ..Config::default()
        };
        let settings = settings().with_config(&config);
        assert_abs_diff_eq!(settings.button_step.value(), 80.0);
        assert_eq!(settings.align, Align::Center);
        assert_eq!(settings.load_timeout, Some(Duration::from_millis(1500)));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Slide descriptions and layout enums.

use super::newtypes::ProportionalHeight;
use serde::{Deserialize, Serialize};

/// One slide of the reel. Immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderImage {
    /// URL or local path of the image.
    pub source: String,
    /// Percentage of the track height this image occupies.
    #[serde(default = "full_height")]
    pub proportional_height: f32,
    /// Left position in pixels. Only meaningful in mosaic mode.
    #[serde(default)]
    pub pos_x: Option<f32>,
    /// Top position in pixels. Only meaningful in mosaic mode.
    #[serde(default)]
    pub pos_y: Option<f32>,
}

fn full_height() -> f32 {
    ProportionalHeight::FULL.value()
}

impl SliderImage {
    /// Creates a slide that fills the whole track height.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            proportional_height: full_height(),
            pos_x: None,
            pos_y: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, percent: f32) -> Self {
        self.proportional_height = percent;
        self
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.pos_x = Some(x);
        self.pos_y = Some(y);
        self
    }

    #[must_use]
    pub fn height(&self) -> ProportionalHeight {
        ProportionalHeight::new(self.proportional_height)
    }
}

/// Geometry algorithm used to place slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Slides flow end-to-end from left to right.
    #[default]
    Linear,
    /// Slides sit at their explicit `pos_x`/`pos_y`.
    Mosaic,
}

/// Vertical placement of slides in linear mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Direction content travels across the viewport.
///
/// `Right` reveals content further to the right, which makes the offset
/// more negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Sign applied to a positive delta when moving in this direction.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Left => 1.0,
            ScrollDirection::Right => -1.0,
        }
    }
}

/// Natural pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or zero for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_fills_track() {
        let image = SliderImage::new("a.png");
        assert_eq!(image.height(), ProportionalHeight::FULL);
        assert!(image.pos_x.is_none());
    }

    #[test]
    fn zero_height_has_zero_aspect_ratio() {
        assert_eq!(Dimensions::new(100, 0).aspect_ratio(), 0.0);
        assert_eq!(Dimensions::new(200, 100).aspect_ratio(), 2.0);
    }

    #[test]
    fn direction_signs_follow_offset_convention() {
        assert_eq!(ScrollDirection::Left.sign(), 1.0);
        assert_eq!(ScrollDirection::Right.sign(), -1.0);
    }

    #[test]
    fn enums_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            mode: LayoutMode,
            align: Align,
        }
        let probe: Probe = toml::from_str("mode = \"mosaic\"\nalign = \"bottom\"").unwrap();
        assert_eq!(probe.mode, LayoutMode::Mosaic);
        assert_eq!(probe.align, Align::Bottom);
    }

    #[test]
    fn image_deserializes_with_defaults() {
        let image: SliderImage = toml::from_str("source = \"b.jpg\"").unwrap();
        assert_eq!(image.proportional_height, 100.0);
        assert!(image.pos_y.is_none());
    }
}

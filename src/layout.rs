// SPDX-License-Identifier: MPL-2.0
//! Track geometry: turns natural image sizes into per-slide boxes and the
//! total scrollable width.
//!
//! Everything here is pure. The two modes compensate for image borders
//! differently and both conventions are kept as-is:
//!
//! - **Linear**: `Σ(width_i − 2·border) + spacing·(n − 1)`
//! - **Mosaic**: `max(pos_x_i + width_i) − border`

use crate::domain::slider::{Align, Dimensions, LayoutMode, SliderImage};

/// Numeric pixel portion of a CSS length such as `"300px"`.
///
/// Only the leading integer is read (`"12.5px"` → 12). Anything that does
/// not start with digits yields a zero height instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackHeight(f32);

impl TrackHeight {
    #[must_use]
    pub fn from_pixels(pixels: f32) -> Self {
        if pixels.is_finite() && pixels > 0.0 {
            Self(pixels)
        } else {
            Self(0.0)
        }
    }

    #[must_use]
    pub fn parse(css: &str) -> Self {
        let trimmed = css.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if negative || end == 0 {
            return Self(0.0);
        }
        digits[..end]
            .parse::<f32>()
            .map(Self::from_pixels)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

/// A `calc(percent% + pixels px)` style vertical position, relative to the
/// track height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalOffset {
    pub percent: f32,
    pub pixels: f32,
}

impl VerticalOffset {
    #[must_use]
    pub fn pixels(pixels: f32) -> Self {
        Self {
            percent: 0.0,
            pixels,
        }
    }

    /// Resolves the offset against a concrete track height.
    #[must_use]
    pub fn resolve(self, track_height: f32) -> f32 {
        track_height * self.percent / 100.0 + self.pixels
    }

    /// Linear-mode placement for an image of `height` inside a track whose
    /// images carry a `border` of the given width.
    #[must_use]
    pub fn aligned(align: Align, height: f32, border: f32) -> Self {
        match align {
            Align::Top => Self::pixels(0.0),
            Align::Center => Self {
                percent: 50.0,
                pixels: border / 2.0 - height / 2.0,
            },
            Align::Bottom => Self {
                percent: 100.0,
                pixels: border - height,
            },
        }
    }
}

/// Box of a single slide on the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: VerticalOffset,
}

/// Inputs to [`compute_layout`] other than the slides themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub track_height: TrackHeight,
    pub mode: LayoutMode,
    pub spacing: f32,
    pub border: f32,
    pub align: Align,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            track_height: TrackHeight::default(),
            mode: LayoutMode::Linear,
            spacing: 0.0,
            border: 0.0,
            align: Align::Top,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub images: Vec<ImageGeometry>,
    pub total_width: f32,
}

/// Computes slide boxes and total content width.
///
/// `dimensions` is matched to `images` by index; a missing entry or a zero
/// natural height produces a zero-width slide.
#[must_use]
pub fn compute_layout(
    images: &[SliderImage],
    params: &LayoutParams,
    dimensions: &[Dimensions],
) -> Layout {
    if images.is_empty() {
        return Layout::default();
    }

    let track_height = params.track_height.pixels();
    let sized = images.iter().enumerate().map(|(index, image)| {
        let natural = dimensions.get(index).copied().unwrap_or_default();
        let height = track_height * image.height().as_fraction();
        let width = natural.aspect_ratio() * height;
        (image, width, height)
    });

    match params.mode {
        LayoutMode::Linear => {
            let mut left = 0.0;
            let mut total_width = 0.0;
            let geometry = sized
                .map(|(_, width, height)| {
                    let geometry = ImageGeometry {
                        width,
                        height,
                        left,
                        top: VerticalOffset::aligned(params.align, height, params.border),
                    };
                    left += width + params.spacing;
                    total_width += width - 2.0 * params.border;
                    geometry
                })
                .collect::<Vec<_>>();
            total_width += params.spacing * (geometry.len() - 1) as f32;
            Layout {
                images: geometry,
                total_width,
            }
        }
        LayoutMode::Mosaic => {
            let mut right_edge = 0.0_f32;
            let geometry = sized
                .map(|(image, width, height)| {
                    let left = image.pos_x.unwrap_or(0.0);
                    right_edge = right_edge.max(left + width);
                    ImageGeometry {
                        width,
                        height,
                        left,
                        top: VerticalOffset::pixels(image.pos_y.unwrap_or(0.0)),
                    }
                })
                .collect();
            Layout {
                images: geometry,
                total_width: right_edge - params.border,
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Reel newtypes.
//!
//! This module provides type-safe wrappers for reel tuning values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_BUTTON_STEP, DEFAULT_HOVER_SENSITIVITY, DEFAULT_WHEEL_SENSITIVITY,
    MAX_BUTTON_STEP, MAX_HOVER_SENSITIVITY, MAX_PROPORTIONAL_HEIGHT, MAX_WHEEL_SENSITIVITY,
    MIN_BUTTON_STEP, MIN_HOVER_SENSITIVITY, MIN_PROPORTIONAL_HEIGHT, MIN_WHEEL_SENSITIVITY,
};

/// Clamps `value` into `[min, max]`, mapping NaN to `fallback`.
fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

// =============================================================================
// WheelSensitivity
// =============================================================================

/// Multiplier applied to wheel deltas before they become offset changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSensitivity(f32);

impl WheelSensitivity {
    /// Creates a new sensitivity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_finite(
            value,
            MIN_WHEEL_SENSITIVITY,
            MAX_WHEEL_SENSITIVITY,
            DEFAULT_WHEEL_SENSITIVITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelSensitivity {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_SENSITIVITY)
    }
}

// =============================================================================
// ScrollStep
// =============================================================================

/// Pixel distance moved by a single left/right trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep(f32);

impl ScrollStep {
    /// Creates a new step, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(clamp_finite(
            pixels,
            MIN_BUTTON_STEP,
            MAX_BUTTON_STEP,
            DEFAULT_BUTTON_STEP,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScrollStep {
    fn default() -> Self {
        Self(DEFAULT_BUTTON_STEP)
    }
}

// =============================================================================
// HoverSensitivity
// =============================================================================

/// Base pixels-per-frame factor for edge-hover auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSensitivity(f32);

impl HoverSensitivity {
    /// Creates a new sensitivity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_finite(
            value,
            MIN_HOVER_SENSITIVITY,
            MAX_HOVER_SENSITIVITY,
            DEFAULT_HOVER_SENSITIVITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for HoverSensitivity {
    fn default() -> Self {
        Self(DEFAULT_HOVER_SENSITIVITY)
    }
}

// =============================================================================
// ProportionalHeight
// =============================================================================

/// Image height as a percentage of the track height (0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalHeight(f32);

impl ProportionalHeight {
    /// Full track height.
    pub const FULL: Self = Self(MAX_PROPORTIONAL_HEIGHT);

    /// Creates a new proportional height, clamping to 0–100%.
    /// NaN degrades to zero so geometry collapses instead of propagating.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(clamp_finite(
            percent,
            MIN_PROPORTIONAL_HEIGHT,
            MAX_PROPORTIONAL_HEIGHT,
            MIN_PROPORTIONAL_HEIGHT,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the height as a fraction (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for ProportionalHeight {
    fn default() -> Self {
        Self::FULL
    }
}

// =============================================================================
// Tests
// =============================================================================

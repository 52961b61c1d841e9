// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Wheel**: Mouse wheel sensitivity and activity debounce
//! - **Buttons**: Discrete step size for the left/right triggers
//! - **Hover**: Edge-hover auto-scroll sensitivity, dead zone, speed
//! - **Layout**: Spacing and proportional height bounds

use std::time::Duration;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Default multiplier applied to wheel deltas.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 1.0;

/// Minimum wheel sensitivity.
pub const MIN_WHEEL_SENSITIVITY: f32 = 0.0;

/// Maximum wheel sensitivity.
pub const MAX_WHEEL_SENSITIVITY: f32 = 20.0;

/// Quiet period after the last wheel event before the wheel counts as idle.
pub const WHEEL_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Pixels scrolled per wheel notch when the platform reports whole lines.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

// ==========================================================================
// Button Defaults
// ==========================================================================

/// Default pixel distance moved by one button step.
pub const DEFAULT_BUTTON_STEP: f32 = 150.0;

/// Minimum button step in pixels.
pub const MIN_BUTTON_STEP: f32 = 1.0;

/// Maximum button step in pixels.
pub const MAX_BUTTON_STEP: f32 = 10_000.0;

// ==========================================================================
// Hover Defaults
// ==========================================================================

/// Default hover auto-scroll sensitivity.
pub const DEFAULT_HOVER_SENSITIVITY: f32 = 25.0;

/// Minimum hover sensitivity.
pub const MIN_HOVER_SENSITIVITY: f32 = 0.0;

/// Maximum hover sensitivity.
pub const MAX_HOVER_SENSITIVITY: f32 = 1_000.0;

/// Half-width of the central dead zone where hovering does not scroll.
pub const HOVER_DEAD_ZONE: f32 = 100.0;

/// Speed coefficient used until the pointer first moves inside the track,
/// and the per-pixel factor applied to edge proximity afterwards.
pub const HOVER_BASE_SPEED_COEFFICIENT: f32 = 0.001;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default horizontal gap between images in linear mode.
pub const DEFAULT_IMAGE_SPACING: f32 = 0.0;

/// Default image border width used for geometry compensation.
pub const DEFAULT_BORDER: f32 = 0.0;

/// Minimum proportional image height (percent of track height).
pub const MIN_PROPORTIONAL_HEIGHT: f32 = 0.0;

/// Maximum proportional image height (percent of track height).
pub const MAX_PROPORTIONAL_HEIGHT: f32 = 100.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WHEEL_SENSITIVITY >= 0.0);
    assert!(MAX_WHEEL_SENSITIVITY > MIN_WHEEL_SENSITIVITY);
    assert!(DEFAULT_WHEEL_SENSITIVITY >= MIN_WHEEL_SENSITIVITY);
    assert!(DEFAULT_WHEEL_SENSITIVITY <= MAX_WHEEL_SENSITIVITY);
    assert!(WHEEL_LINE_PIXELS > 0.0);

    assert!(MIN_BUTTON_STEP > 0.0);
    assert!(MAX_BUTTON_STEP > MIN_BUTTON_STEP);
    assert!(DEFAULT_BUTTON_STEP >= MIN_BUTTON_STEP);
    assert!(DEFAULT_BUTTON_STEP <= MAX_BUTTON_STEP);

    assert!(MIN_HOVER_SENSITIVITY >= 0.0);
    assert!(MAX_HOVER_SENSITIVITY > MIN_HOVER_SENSITIVITY);
    assert!(DEFAULT_HOVER_SENSITIVITY >= MIN_HOVER_SENSITIVITY);
    assert!(DEFAULT_HOVER_SENSITIVITY <= MAX_HOVER_SENSITIVITY);
    assert!(HOVER_DEAD_ZONE >= 0.0);
    assert!(HOVER_BASE_SPEED_COEFFICIENT > 0.0);

    assert!(MIN_PROPORTIONAL_HEIGHT >= 0.0);
    assert!(MAX_PROPORTIONAL_HEIGHT > MIN_PROPORTIONAL_HEIGHT);
};

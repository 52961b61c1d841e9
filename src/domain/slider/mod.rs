// SPDX-License-Identifier: MPL-2.0
//! Reel domain types.
//!
//! This module contains slide descriptions and tuning values that are
//! independent of any presentation framework.

pub mod newtypes;
pub mod types;

// Re-export commonly used types
pub use newtypes::{HoverSensitivity, ProportionalHeight, ScrollStep, WheelSensitivity};
pub use types::{Align, Dimensions, LayoutMode, ScrollDirection, SliderImage};

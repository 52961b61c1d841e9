// SPDX-License-Identifier: MPL-2.0
//! Slider state management modules
//!
//! Each input adapter lives in its own module and moves the track only
//! through [`ScrollController`], which keeps the offset within bounds.

pub mod animation;
pub mod button;
pub mod hover;
pub mod resize;
pub mod scroll;
pub mod wheel;

// Re-export commonly used types for convenience
pub use animation::{EaseOutAnimation, OffsetAnimator};
pub use button::{ButtonStep, ButtonStepper};
pub use hover::{HoverDirection, HoverEngine, HoverState};
pub use resize::ResizeWatcher;
pub use scroll::ScrollController;
pub use wheel::{vertical_amount, WheelInput, WheelScroll, WheelToken};

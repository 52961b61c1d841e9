// SPDX-License-Identifier: MPL-2.0
//! Offset animation
//!
//! The displayed track position chases the authoritative offset through an
//! [`OffsetAnimator`]. The default [`EaseOutAnimation`] uses a time-constant
//! filter stepped once per display frame.

use std::fmt;
use std::time::{Duration, Instant};

/// Animates the visual offset toward a target value.
pub trait OffsetAnimator: fmt::Debug {
    /// Starts (or retargets) a transition toward `target`.
    fn animate_to(&mut self, target: f32);

    /// Advances the transition to `now`. Returns true if the value moved.
    fn tick(&mut self, now: Instant) -> bool;

    /// Current displayed value.
    fn value(&self) -> f32;

    /// Whether the value has not yet reached its target.
    fn is_animating(&self) -> bool;
}

/// Time constant of the ease-out filter.
const EASE_TAU: Duration = Duration::from_millis(120);

/// Largest frame step fed into the filter; longer gaps (dropped frames,
/// a window in the background) are treated as one slow frame.
const MAX_FRAME_STEP: Duration = Duration::from_millis(33);

/// Nominal frame used for the first step after the animation starts.
const NOMINAL_FRAME: Duration = Duration::from_millis(16);

/// Distance below which the value snaps onto the target.
const SETTLE_DISTANCE: f32 = 0.5;

/// Exponential ease-out toward the latest target.
#[derive(Debug, Clone, Default)]
pub struct EaseOutAnimation {
    value: f32,
    target: f32,
    last_tick: Option<Instant>,
}

impl EaseOutAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl OffsetAnimator for EaseOutAnimation {
    fn animate_to(&mut self, target: f32) {
        if !self.is_animating() {
            self.last_tick = None;
        }
        self.target = target;
    }

    fn tick(&mut self, now: Instant) -> bool {
        if !self.is_animating() {
            self.last_tick = None;
            return false;
        }

        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).min(MAX_FRAME_STEP),
            None => NOMINAL_FRAME,
        };
        self.last_tick = Some(now);
        if dt.is_zero() {
            return false;
        }

        let alpha = 1.0 - (-dt.as_secs_f32() / EASE_TAU.as_secs_f32()).exp();
        self.value += (self.target - self.value) * alpha;
        if (self.target - self.value).abs() < SETTLE_DISTANCE {
            self.value = self.target;
        }
        true
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn is_animating(&self) -> bool {
        self.value != self.target
    }
}

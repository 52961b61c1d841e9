// SPDX-License-Identifier: MPL-2.0
//! Mouse wheel input
//!
//! Vertical wheel motion scrolls the track horizontally: scrolling down
//! moves content to the left. While the wheel is in use, hover auto-scroll
//! stays suppressed until a quiet period passes with no further wheel events.

use super::animation::OffsetAnimator;
use super::scroll::ScrollController;
use crate::config::WHEEL_LINE_PIXELS;
use crate::domain::slider::WheelSensitivity;
use iced::mouse::ScrollDelta;

/// Identifies the wheel event that scheduled a quiet-period timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelToken(u64);

/// Result of a wheel event that moved (or tried to move) the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelScroll {
    /// Clamped offset after the event.
    pub offset: f32,
    /// Token to hand back once the quiet period elapses.
    pub token: WheelToken,
}

/// Translates wheel events into offset proposals.
#[derive(Debug, Clone, Default)]
pub struct WheelInput {
    sensitivity: WheelSensitivity,
    active: bool,
    latest: u64,
}

impl WheelInput {
    #[must_use]
    pub fn new(sensitivity: WheelSensitivity) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    pub fn set_sensitivity(&mut self, sensitivity: WheelSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// Whether a wheel event arrived within the current quiet period.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handles one wheel event. `vertical_amount` follows the browser
    /// convention: positive means the user scrolled down.
    ///
    /// Returns `None` (and changes nothing) while either extent is unknown.
    pub fn on_wheel<A: OffsetAnimator>(
        &mut self,
        vertical_amount: f32,
        scroll: &mut ScrollController<A>,
    ) -> Option<WheelScroll> {
        if !scroll.has_extents() || !vertical_amount.is_finite() {
            return None;
        }

        let delta = vertical_amount * self.sensitivity.value();
        let offset = scroll.propose_offset(scroll.offset() - delta);

        self.active = true;
        self.latest += 1;
        Some(WheelScroll {
            offset,
            token: WheelToken(self.latest),
        })
    }

    /// Called when a quiet-period timer fires. Only the timer of the most
    /// recent wheel event clears the active flag.
    pub fn on_quiet(&mut self, token: WheelToken) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.active = false;
        true
    }

    /// Clears the active flag and orphans any pending timers.
    pub fn reset(&mut self) {
        self.active = false;
        self.latest += 1;
    }
}

/// Converts an iced wheel delta into a browser-style vertical amount in
/// pixels (positive = scrolled down).
#[must_use]
pub fn vertical_amount(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PIXELS,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::scroll::tests::controller;

    #[test]
    fn scrolling_down_moves_content_left() {
        let mut scroll = controller(2000.0, 500.0);
        let mut wheel = WheelInput::default();

        let result = wheel.on_wheel(120.0, &mut scroll).expect("extents known");
        assert!(result.offset < 0.0);
        assert_abs_diff_eq!(result.offset, -120.0);
    }

    #[test]
    fn sensitivity_scales_delta() {
        let mut scroll = controller(2000.0, 500.0);
        let mut wheel = WheelInput::new(WheelSensitivity::new(2.5));
        let result = wheel.on_wheel(100.0, &mut scroll).expect("extents known");
        assert_abs_diff_eq!(result.offset, -250.0);
    }

    #[test]
    fn scrolling_up_at_start_stays_at_zero() {
        let mut scroll = controller(2000.0, 500.0);
        let mut wheel = WheelInput::default();
        let result = wheel.on_wheel(-300.0, &mut scroll).expect("extents known");
        assert_abs_diff_eq!(result.offset, 0.0);
    }

    #[test]
    fn unknown_extents_are_a_no_op() {
        let mut scroll = controller(0.0, 500.0);
        let mut wheel = WheelInput::default();
        assert!(wheel.on_wheel(100.0, &mut scroll).is_none());
        assert!(!wheel.is_active());
        assert_abs_diff_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn only_latest_timer_clears_activity() {
        let mut scroll = controller(2000.0, 500.0);
        let mut wheel = WheelInput::default();
        let first = wheel.on_wheel(10.0, &mut scroll).expect("extents known");
        let second = wheel.on_wheel(10.0, &mut scroll).expect("extents known");

        assert!(!wheel.on_quiet(first.token));
        assert!(wheel.is_active());
        assert!(wheel.on_quiet(second.token));
        assert!(!wheel.is_active());
    }

    #[test]
    fn reset_orphans_pending_timer() {
        let mut scroll = controller(2000.0, 500.0);
        let mut wheel = WheelInput::default();
        let pending = wheel.on_wheel(10.0, &mut scroll).expect("extents known");
        wheel.reset();
        assert!(!wheel.is_active());
        assert!(!wheel.on_quiet(pending.token));
    }

    #[test]
    fn iced_deltas_follow_browser_sign() {
        // Wheel rolled toward the user reports negative y in iced.
        assert!(vertical_amount(ScrollDelta::Lines { x: 0.0, y: -1.0 }) > 0.0);
        assert_abs_diff_eq!(
            vertical_amount(ScrollDelta::Pixels { x: 0.0, y: 30.0 }),
            -30.0
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Edge-hover auto-scroll
//!
//! While the pointer rests over the track outside a central dead zone, the
//! track drifts toward the side the pointer is on, once per display frame.
//! The closer the pointer is to an edge, the faster the drift.

use super::animation::OffsetAnimator;
use super::scroll::ScrollController;
use crate::config::{HOVER_BASE_SPEED_COEFFICIENT, HOVER_DEAD_ZONE};
use crate::domain::slider::{HoverSensitivity, ScrollDirection};
use iced::Rectangle;

/// Where the pointer sits relative to the viewport centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverDirection {
    Left,
    Right,
    /// Inside the dead zone; no drift.
    Neutral,
}

impl HoverDirection {
    /// Classifies a pointer x coordinate against the viewport bounds.
    #[must_use]
    pub fn classify(pointer_x: f32, viewport: Rectangle) -> Self {
        let center = viewport.x + viewport.width / 2.0;
        if pointer_x > center + HOVER_DEAD_ZONE {
            HoverDirection::Right
        } else if pointer_x < center - HOVER_DEAD_ZONE {
            HoverDirection::Left
        } else {
            HoverDirection::Neutral
        }
    }

    fn scroll_direction(self) -> Option<ScrollDirection> {
        match self {
            HoverDirection::Left => Some(ScrollDirection::Left),
            HoverDirection::Right => Some(ScrollDirection::Right),
            HoverDirection::Neutral => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Active(HoverDirection),
}

/// Per-instance hover state machine and its speed coefficient.
#[derive(Debug, Clone)]
pub struct HoverEngine {
    state: HoverState,
    sensitivity: HoverSensitivity,
    speed_coefficient: f32,
}

impl Default for HoverEngine {
    fn default() -> Self {
        Self::new(HoverSensitivity::default())
    }
}

impl HoverEngine {
    #[must_use]
    pub fn new(sensitivity: HoverSensitivity) -> Self {
        Self {
            state: HoverState::Idle,
            sensitivity,
            speed_coefficient: HOVER_BASE_SPEED_COEFFICIENT,
        }
    }

    pub fn set_sensitivity(&mut self, sensitivity: HoverSensitivity) {
        self.sensitivity = sensitivity;
    }

    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn direction(&self) -> Option<HoverDirection> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Active(direction) => Some(direction),
        }
    }

    #[must_use]
    pub fn speed_coefficient(&self) -> f32 {
        self.speed_coefficient
    }

    /// Liveness flag for the frame loop.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, HoverState::Active(_))
    }

    /// Pointer crossed into the track. Starts the loop only once the images
    /// are loaded and the wheel is quiet. Returns true if the loop started.
    pub fn pointer_entered(
        &mut self,
        pointer_x: f32,
        viewport: Rectangle,
        is_loaded: bool,
        wheel_active: bool,
    ) -> bool {
        if !is_loaded || wheel_active {
            return false;
        }
        self.state = HoverState::Active(HoverDirection::classify(pointer_x, viewport));
        true
    }

    /// Pointer moved over the track.
    pub fn pointer_moved(&mut self, pointer_x: f32, viewport: Rectangle) {
        self.speed_coefficient = edge_speed(pointer_x, viewport);
        if self.is_running() {
            self.state = HoverState::Active(HoverDirection::classify(pointer_x, viewport));
        }
    }

    /// Pointer left the track; the loop stops on its next frame.
    pub fn pointer_left(&mut self) {
        self.state = HoverState::Idle;
    }

    /// Runs one frame of the loop. Returns the new offset if the track
    /// moved; `None` when idle, in the dead zone, suppressed by the wheel,
    /// or already pinned against a bound.
    pub fn tick<A: OffsetAnimator>(
        &mut self,
        scroll: &mut ScrollController<A>,
        wheel_active: bool,
    ) -> Option<f32> {
        let HoverState::Active(direction) = self.state else {
            return None;
        };
        let direction = direction.scroll_direction()?;
        if wheel_active || !scroll.has_extents() {
            return None;
        }

        let delta = self.sensitivity.value() * self.speed_coefficient;
        let candidate = scroll.offset() + direction.sign() * delta;
        if scroll.clamp(candidate) == scroll.offset() {
            return None;
        }
        Some(scroll.propose_offset(candidate))
    }
}

/// Speed coefficient for a pointer position: zero at the centre, growing
/// linearly toward either edge.
fn edge_speed(pointer_x: f32, viewport: Rectangle) -> f32 {
    let distance_to_edge = (pointer_x - viewport.x)
        .abs()
        .min((pointer_x - (viewport.x + viewport.width)).abs());
    (HOVER_BASE_SPEED_COEFFICIENT * (viewport.width / 2.0 - distance_to_edge)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::scroll::tests::controller;
    use iced::{Point, Size};

    fn viewport() -> Rectangle {
        Rectangle::new(Point::new(100.0, 0.0), Size::new(800.0, 200.0))
    }

    #[test]
    fn classify_uses_dead_zone_around_center() {
        // centre at 500
        assert_eq!(HoverDirection::classify(650.0, viewport()), HoverDirection::Right);
        assert_eq!(HoverDirection::classify(350.0, viewport()), HoverDirection::Left);
        assert_eq!(HoverDirection::classify(560.0, viewport()), HoverDirection::Neutral);
        assert_eq!(HoverDirection::classify(400.0, viewport()), HoverDirection::Neutral);
    }

    #[test]
    fn enter_is_ignored_until_loaded() {
        let mut hover = HoverEngine::default();
        assert!(!hover.pointer_entered(850.0, viewport(), false, false));
        assert_eq!(hover.state(), HoverState::Idle);
    }

    #[test]
    fn enter_is_ignored_while_wheel_active() {
        let mut hover = HoverEngine::default();
        assert!(!hover.pointer_entered(850.0, viewport(), true, true));
        assert!(!hover.is_running());
    }

    #[test]
    fn enter_move_leave_transitions() {
        let mut hover = HoverEngine::default();
        assert!(hover.pointer_entered(850.0, viewport(), true, false));
        assert_eq!(hover.state(), HoverState::Active(HoverDirection::Right));

        hover.pointer_moved(150.0, viewport());
        assert_eq!(hover.state(), HoverState::Active(HoverDirection::Left));

        hover.pointer_left();
        assert_eq!(hover.state(), HoverState::Idle);
    }

    #[test]
    fn move_while_idle_does_not_start_loop() {
        let mut hover = HoverEngine::default();
        hover.pointer_moved(850.0, viewport());
        assert!(!hover.is_running());
    }

    #[test]
    fn speed_grows_toward_edges() {
        let mut hover = HoverEngine::default();
        hover.pointer_moved(500.0, viewport());
        assert_abs_diff_eq!(hover.speed_coefficient(), 0.0);

        hover.pointer_moved(880.0, viewport());
        let near_edge = hover.speed_coefficient();
        hover.pointer_moved(700.0, viewport());
        assert!(near_edge > hover.speed_coefficient());
        // 20px from the right edge: 0.001 * (400 - 20)
        assert_abs_diff_eq!(near_edge, 0.38, epsilon = 1e-5);
    }

    #[test]
    fn dead_zone_produces_no_motion() {
        let mut scroll = controller(3000.0, 800.0);
        scroll.propose_offset(-500.0);
        let mut hover = HoverEngine::default();
        hover.pointer_entered(520.0, viewport(), true, false);
        hover.pointer_moved(520.0, viewport());

        for _ in 0..10 {
            assert!(hover.tick(&mut scroll, false).is_none());
        }
        assert_abs_diff_eq!(scroll.offset(), -500.0);
    }

    #[test]
    fn right_hover_moves_content_left_each_frame() {
        let mut scroll = controller(3000.0, 800.0);
        let mut hover = HoverEngine::new(HoverSensitivity::new(25.0));
        hover.pointer_entered(880.0, viewport(), true, false);
        hover.pointer_moved(880.0, viewport());

        let first = hover.tick(&mut scroll, false).expect("moved");
        let second = hover.tick(&mut scroll, false).expect("moved");
        assert_abs_diff_eq!(first, -9.5, epsilon = 1e-4);
        assert_abs_diff_eq!(second, -19.0, epsilon = 1e-4);
    }

    #[test]
    fn left_hover_at_start_is_pinned() {
        let mut scroll = controller(3000.0, 800.0);
        let mut hover = HoverEngine::default();
        hover.pointer_entered(120.0, viewport(), true, false);
        hover.pointer_moved(120.0, viewport());
        assert!(hover.tick(&mut scroll, false).is_none());
        assert_abs_diff_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn loop_stops_after_leave() {
        let mut scroll = controller(3000.0, 800.0);
        let mut hover = HoverEngine::default();
        hover.pointer_entered(880.0, viewport(), true, false);
        hover.pointer_moved(880.0, viewport());
        assert!(hover.tick(&mut scroll, false).is_some());

        hover.pointer_left();
        let parked = scroll.offset();
        assert!(hover.tick(&mut scroll, false).is_none());
        assert_abs_diff_eq!(scroll.offset(), parked);
    }

    #[test]
    fn wheel_activity_suppresses_drift() {
        let mut scroll = controller(3000.0, 800.0);
        let mut hover = HoverEngine::default();
        hover.pointer_entered(880.0, viewport(), true, false);
        hover.pointer_moved(880.0, viewport());
        assert!(hover.tick(&mut scroll, true).is_none());
        assert!(hover.is_running());
    }
}

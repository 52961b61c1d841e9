// SPDX-License-Identifier: MPL-2.0
//! Scroll offset state management
//!
//! [`ScrollController`] owns the single authoritative track offset. Every
//! input source goes through [`ScrollController::propose_offset`], so the
//! bounds invariant `max_offset() <= offset <= 0` holds no matter which
//! adapter moved the track.

use super::animation::{EaseOutAnimation, OffsetAnimator};
use std::time::Instant;

/// Owns the track offset and the extents it is clamped against.
#[derive(Debug, Clone)]
pub struct ScrollController<A = EaseOutAnimation> {
    /// Authoritative offset (always `<= 0`).
    offset: f32,

    /// Total width of the laid-out slides.
    content_width: f32,

    /// Visible width of the track.
    container_width: f32,

    /// Drives the visual position toward `offset`.
    animator: A,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::with_animator(EaseOutAnimation::new())
    }
}

impl ScrollController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: OffsetAnimator> ScrollController<A> {
    /// Creates a controller at offset zero driving the given animator.
    pub fn with_animator(animator: A) -> Self {
        Self {
            offset: 0.0,
            content_width: 0.0,
            container_width: 0.0,
            animator,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[must_use]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Whether both extents have been measured.
    #[must_use]
    pub fn has_extents(&self) -> bool {
        self.content_width > 0.0 && self.container_width > 0.0
    }

    /// Most negative valid offset. Collapses to zero when the content is
    /// narrower than the viewport.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.container_width - self.content_width).min(0.0)
    }

    /// Clamps `candidate` into the valid range without applying it.
    /// A NaN candidate resolves to the current offset.
    #[must_use]
    pub fn clamp(&self, candidate: f32) -> f32 {
        if candidate.is_nan() {
            return self.offset;
        }
        candidate.clamp(self.max_offset(), 0.0)
    }

    /// Applies a clamped offset and starts animating toward it.
    pub fn propose_offset(&mut self, candidate: f32) -> f32 {
        let clamped = self.clamp(candidate);
        self.offset = clamped;
        self.animator.animate_to(clamped);
        clamped
    }

    /// Records a new content width and re-clamps the current offset.
    pub fn set_content_width(&mut self, width: f32) -> f32 {
        self.content_width = sanitize_extent(width);
        self.reclamp()
    }

    /// Records a new viewport width and re-clamps the current offset.
    pub fn set_container_width(&mut self, width: f32) -> f32 {
        self.container_width = sanitize_extent(width);
        self.reclamp()
    }

    /// Pulls the existing offset back into bounds after an extent change.
    /// A valid offset is left untouched.
    fn reclamp(&mut self) -> f32 {
        let clamped = self.offset.clamp(self.max_offset(), 0.0);
        if clamped != self.offset {
            self.offset = clamped;
            self.animator.animate_to(clamped);
        }
        self.offset
    }

    /// Offset currently shown on screen.
    #[must_use]
    pub fn displayed_offset(&self) -> f32 {
        self.animator.value()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Advances the animation by one frame. Returns true if the displayed
    /// offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animator.tick(now)
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }
}

fn sanitize_extent(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    /// Animator that jumps straight to the target and records requests.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct RecordingAnimator {
        pub targets: Vec<f32>,
    }

    impl OffsetAnimator for RecordingAnimator {
        fn animate_to(&mut self, target: f32) {
            self.targets.push(target);
        }

        fn tick(&mut self, _now: Instant) -> bool {
            false
        }

        fn value(&self) -> f32 {
            self.targets.last().copied().unwrap_or(0.0)
        }

        fn is_animating(&self) -> bool {
            false
        }
    }

    pub(crate) fn controller(content: f32, container: f32) -> ScrollController<RecordingAnimator> {
        let mut scroll = ScrollController::with_animator(RecordingAnimator::default());
        scroll.set_content_width(content);
        scroll.set_container_width(container);
        scroll
    }

    #[test]
    fn default_controller_has_zero_offset_and_no_extents() {
        let scroll = ScrollController::new();
        assert_abs_diff_eq!(scroll.offset(), 0.0);
        assert!(!scroll.has_extents());
        assert_abs_diff_eq!(scroll.max_offset(), 0.0);
    }

    #[test]
    fn proposals_are_clamped_to_both_bounds() {
        let mut scroll = controller(1000.0, 400.0);
        assert_abs_diff_eq!(scroll.propose_offset(50.0), 0.0);
        assert_abs_diff_eq!(scroll.propose_offset(-5000.0), -600.0);
        assert_abs_diff_eq!(scroll.propose_offset(-250.0), -250.0);
    }

    #[test]
    fn clamp_invariant_holds_for_many_extents() {
        let extents = [(0.0, 0.0), (300.0, 800.0), (800.0, 300.0), (1020.0, 1020.0)];
        let candidates = [f32::NEG_INFINITY, -1e6, -123.4, -0.0, 0.0, 77.0, f32::INFINITY];
        for (content, container) in extents {
            let mut scroll = controller(content, container);
            let lower = (-(content - container)).min(0.0);
            for candidate in candidates {
                let result = scroll.propose_offset(candidate);
                assert!(
                    result >= lower && result <= 0.0,
                    "{candidate} -> {result} outside [{lower}, 0]"
                );
            }
        }
    }

    #[test]
    fn narrow_content_collapses_range_to_zero() {
        let mut scroll = controller(300.0, 800.0);
        assert_abs_diff_eq!(scroll.propose_offset(-100.0), 0.0);
    }

    #[test]
    fn nan_proposal_keeps_current_offset() {
        let mut scroll = controller(1000.0, 400.0);
        scroll.propose_offset(-200.0);
        assert_abs_diff_eq!(scroll.propose_offset(f32::NAN), -200.0);
    }

    #[test]
    fn proposal_drives_the_animator() {
        let mut scroll = controller(1000.0, 400.0);
        scroll.propose_offset(-150.0);
        assert_eq!(scroll.animator().targets.last(), Some(&-150.0));
    }

    #[test]
    fn shrinking_content_reclamps_offset() {
        let mut scroll = controller(1000.0, 400.0);
        scroll.propose_offset(-600.0);
        scroll.set_content_width(700.0);
        assert_abs_diff_eq!(scroll.offset(), -300.0);
    }

    #[test]
    fn growing_viewport_reclamps_offset() {
        let mut scroll = controller(1000.0, 400.0);
        scroll.propose_offset(-600.0);
        scroll.set_container_width(900.0);
        assert_abs_diff_eq!(scroll.offset(), -100.0);
    }

    #[test]
    fn reclamp_with_same_extents_is_idempotent() {
        let mut scroll = controller(1000.0, 400.0);
        scroll.propose_offset(-320.0);
        let requests = scroll.animator().targets.len();

        scroll.set_content_width(1000.0);
        scroll.set_container_width(400.0);

        assert_abs_diff_eq!(scroll.offset(), -320.0);
        assert_eq!(scroll.animator().targets.len(), requests);
    }

    #[test]
    fn invalid_extents_are_treated_as_unmeasured() {
        let mut scroll = controller(f32::NAN, -10.0);
        assert!(!scroll.has_extents());
        assert_abs_diff_eq!(scroll.propose_offset(-10.0), 0.0);
    }
}

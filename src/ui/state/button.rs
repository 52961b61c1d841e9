// SPDX-License-Identifier: MPL-2.0
//! Fixed-step scrolling from external left/right triggers.

use super::animation::OffsetAnimator;
use super::scroll::ScrollController;
use crate::domain::slider::{ScrollDirection, ScrollStep};

/// Outcome of one button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStep {
    pub direction: ScrollDirection,
    /// Clamped offset after the step.
    pub offset: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ButtonStepper {
    step: ScrollStep,
}

impl ButtonStepper {
    #[must_use]
    pub fn new(step: ScrollStep) -> Self {
        Self { step }
    }

    pub fn set_step(&mut self, step: ScrollStep) {
        self.step = step;
    }

    #[must_use]
    pub fn step_size(&self) -> ScrollStep {
        self.step
    }

    /// Moves the track one step. `Left` reveals earlier slides (offset
    /// grows toward zero), `Right` reveals later ones.
    pub fn step<A: OffsetAnimator>(
        &self,
        direction: ScrollDirection,
        scroll: &mut ScrollController<A>,
    ) -> ButtonStep {
        let candidate = scroll.offset() + direction.sign() * self.step.value();
        ButtonStep {
            direction,
            offset: scroll.propose_offset(candidate),
        }
    }

    pub fn step_left<A: OffsetAnimator>(&self, scroll: &mut ScrollController<A>) -> ButtonStep {
        self.step(ScrollDirection::Left, scroll)
    }

    pub fn step_right<A: OffsetAnimator>(&self, scroll: &mut ScrollController<A>) -> ButtonStep {
        self.step(ScrollDirection::Right, scroll)
    }
}

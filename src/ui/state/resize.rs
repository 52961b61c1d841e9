// SPDX-License-Identifier: MPL-2.0
//! Viewport width tracking.
//!
//! The track widget reports its laid-out width every frame it is drawn;
//! the watcher filters those reports down to actual changes.

/// Widths closer than this are considered unchanged.
const WIDTH_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Default)]
pub struct ResizeWatcher {
    width: Option<f32>,
    subscribed: bool,
}

impl ResizeWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts accepting width reports.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Stops accepting width reports. The last known width is kept.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Records a width report. Returns the width if it differs from the
    /// previous one and the watcher is subscribed.
    pub fn observe(&mut self, width: f32) -> Option<f32> {
        if !self.subscribed || !width.is_finite() || width < 0.0 {
            return None;
        }
        match self.width {
            Some(previous) if (previous - width).abs() < WIDTH_EPSILON => None,
            _ => {
                self.width = Some(width);
                Some(width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_changes() {
        let mut watcher = ResizeWatcher::new();
        watcher.subscribe();
        assert_eq!(watcher.observe(800.0), Some(800.0));
        assert_eq!(watcher.observe(800.0), None);
        assert_eq!(watcher.observe(640.0), Some(640.0));
        assert_eq!(watcher.width(), Some(640.0));
    }

    #[test]
    fn ignores_reports_while_unsubscribed() {
        let mut watcher = ResizeWatcher::new();
        assert_eq!(watcher.observe(800.0), None);

        watcher.subscribe();
        watcher.observe(800.0);
        watcher.unsubscribe();
        assert_eq!(watcher.observe(300.0), None);
        assert_eq!(watcher.width(), Some(800.0));
    }

    #[test]
    fn rejects_invalid_widths() {
        let mut watcher = ResizeWatcher::new();
        watcher.subscribe();
        assert_eq!(watcher.observe(f32::NAN), None);
        assert_eq!(watcher.observe(-5.0), None);
        assert_eq!(watcher.width(), None);
    }
}

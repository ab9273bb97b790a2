//! End-of-results detection.

use std::time::{Duration, Instant};

use super::state::Viewport;
use crate::utils::Debouncer;

/// One-shot watcher armed when the last page is displayed.
///
/// Scroll events are debounced; once the viewport reaches the document bottom
/// while the armed page is still the last page, [`poll`](Self::poll) reports
/// it once and the watcher disarms itself.
#[derive(Debug, Clone)]
pub struct EndOfResultsWatcher {
    armed_page: Option<u32>,
    scrolls: Debouncer<Viewport>,
}

impl EndOfResultsWatcher {
    pub fn new(quiet: Duration) -> Self {
        Self {
            armed_page: None,
            scrolls: Debouncer::new(quiet),
        }
    }

    /// Arm for `page`; replaces any previous arming.
    pub fn arm(&mut self, page: u32) {
        tracing::debug!(page, "End-of-results watcher armed");
        self.armed_page = Some(page);
        self.scrolls.cancel();
    }

    pub fn disarm(&mut self) {
        self.armed_page = None;
        self.scrolls.cancel();
    }

    pub fn is_armed(&self) -> bool {
        self.armed_page.is_some()
    }

    /// Record a scroll event. Ignored while disarmed.
    pub fn on_scroll(&mut self, viewport: Viewport, now: Instant) {
        if self.is_armed() {
            self.scrolls.call(viewport, now);
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.scrolls.deadline()
    }

    /// Run the debounced check. Returns true exactly once, when the end is reached.
    pub fn poll(&mut self, now: Instant, last_page: Option<u32>) -> bool {
        let Some(viewport) = self.scrolls.poll(now) else {
            return false;
        };

        match self.armed_page {
            Some(page) if Some(page) == last_page && viewport.at_bottom() => {
                self.armed_page = None;
                true
            }
            _ => false,
        }
    }
}

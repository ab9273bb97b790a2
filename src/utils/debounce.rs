//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] holds the most recent event of a burst and releases it once
//! no new event has arrived for the quiet period. Time is passed in by the
//! caller, so it works with any event loop (or none, in tests).

use std::time::{Duration, Instant};

/// Rate-limiting wrapper with a configurable quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record an event, replacing any pending one and restarting the quiet period.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending event if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// When the pending event becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending event without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

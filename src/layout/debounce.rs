//! Trailing-edge debounce for layout saves
//!
//! Every mutation restarts the timer; a save is due once `delay` has passed
//! since the most recent mutation.

use std::time::{Duration, Instant};

/// Default quiet period before a pending layout change is written out
pub const SAVE_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct SaveDebouncer {
    delay: Duration,
    last_change: Option<Instant>,
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SAVE_DEBOUNCE_MS))
    }
}

impl SaveDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_change: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a change at `now`, restarting the quiet period
    pub fn touch(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Whether the quiet period has elapsed at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|changed| now.saturating_duration_since(changed) >= self.delay)
    }

    /// Consume a due save. Returns true exactly once per quiet period.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.last_change = None;
            true
        } else {
            false
        }
    }

    /// Consume any pending save regardless of timing
    pub fn take_pending(&mut self) -> bool {
        self.last_change.take().is_some()
    }
}

//! Trailing-edge debouncer on a host-driven clock.

use std::time::Duration;

/// Fires once after `delay` of quiet following the latest trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    /// Arm, or re-arm, the quiet period.
    pub fn trigger(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Move time forward. Returns `true` exactly once per quiet period.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        if dt >= remaining {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining - dt);
            false
        }
    }
}

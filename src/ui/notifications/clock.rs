// SPDX-License-Identifier: MPL-2.0
//! Time source abstraction and the one-shot dismiss timer.
//!
//! The manager never reads `Instant::now()` directly; it asks its [`Clock`].
//! Production code uses [`SystemClock`], tests substitute a manual clock and
//! advance it deterministically.

use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A one-shot auto-removal timer owned by a queue entry.
///
/// Each notification owns exactly one of these from creation until removal.
/// There is no background task behind it: the deadline is checked by the
/// manager's `tick()`, and dropping the timer together with its entry is the
/// synchronous cancellation (a cancelled timer can never fire late, because
/// nothing holds its deadline anymore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    /// Arms a timer that becomes due at `now + delay`.
    #[must_use]
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    /// Returns when this timer becomes due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns true once the deadline has been reached.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

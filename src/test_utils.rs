// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared across unit and integration tests.
//!
//! The main helper is [`ManualClock`], a controllable clock that lets tests
//! advance time deterministically instead of sleeping. It implements the same
//! [`Clock`] trait the notification manager uses in production, so expiry
//! behavior can be verified to the millisecond.

use crate::ui::notifications::Clock;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A clock whose current time only moves when told to.
///
/// Clones share the same underlying time, so a test can hand one clone to a
/// `Manager` and keep another to drive it:
///
/// ```
/// use iced_toasts::test_utils::ManualClock;
/// use iced_toasts::ui::notifications::{Kind, Manager};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut manager = Manager::with_clock(clock.clone());
///
/// manager.notify(Kind::Info, "still here");
/// clock.advance(Duration::from_millis(5001));
/// manager.tick();
/// assert!(!manager.has_notifications());
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `delta`. All clones observe the new time.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

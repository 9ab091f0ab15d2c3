//! Repeat timer: a cancellable periodic deadline.
//!
//! The timer never sleeps or spawns anything. It only remembers when the
//! next tick is due. Whoever owns the event loop asks for the deadline,
//! waits for it, then calls back into the stepper.

use std::time::{Duration, Instant};

/// A one-shot deadline that is re-armed after each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl RepeatTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval. An armed deadline keeps its current due time and
    /// the new interval applies from the next re-arm.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Arm the first tick one interval after `now`.
    ///
    /// An interval too large to represent as an `Instant` leaves the timer
    /// disarmed.
    pub fn start(&mut self, now: Instant) {
        self.next = now.checked_add(self.interval);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Whether a tick is due at `now`.
    pub fn due(&self, now: Instant) -> bool {
        self.next.is_some_and(|next| next <= now)
    }

    /// Schedule the tick after the one that just fired.
    ///
    /// Deadlines advance from the previous deadline, not from `now`, so a late
    /// event loop catches up instead of drifting. A zero interval disarms the
    /// timer rather than spinning forever, and so does overflow.
    pub fn rearm(&mut self) {
        self.next = match self.next {
            Some(_) if self.interval.is_zero() => None,
            Some(next) => next.checked_add(self.interval),
            None => None,
        };
    }
}

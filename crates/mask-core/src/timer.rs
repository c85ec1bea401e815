//! One-shot deadlines polled from the frame loop.
//!
//! A [`TimerSlot`] holds at most one pending deadline. Scheduling always
//! replaces whatever was pending and cancelling an empty slot does nothing, so
//! a slot can never fire twice for one schedule.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSlot {
    deadline: Option<Instant>,
}

impl TimerSlot {
    /// Cancel any pending deadline and arm a new one `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when `now` has reached the deadline, disarming the slot.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

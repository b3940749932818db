//! Autoplay timer
//!
//! A deadline-based recurring timer polled from the engine tick. Hover
//! pauses it without losing the configured interval; explicit user
//! navigation disables it for good (until the engine is re-enabled).

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval: Option<Duration>,
    next_due: Option<Instant>,
    paused: bool,
}

impl Autoplay {
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            next_due: None,
            paused: false,
        }
    }

    /// Whether the timer can still fire (possibly after a resume)
    pub fn is_active(&self) -> bool {
        self.interval.is_some() && !self.paused
    }

    /// Fully stop the timer and cancel the pending deadline; idempotent
    pub fn disable(&mut self) {
        self.interval = None;
        self.next_due = None;
    }

    /// Suspend without losing the interval (hover)
    pub fn pause(&mut self) {
        self.paused = true;
        self.next_due = None;
    }

    /// Undo a pause; the next deadline is re-armed on the next poll
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Poll the timer. Arms the first deadline lazily; returns true when
    /// a period elapsed and the carousel should advance.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if self.paused {
            return false;
        }

        match self.next_due {
            None => {
                self.next_due = Some(now + interval);
                false
            }
            Some(due) if now >= due => {
                self.next_due = Some(now + interval);
                true
            }
            Some(_) => false,
        }
    }
}

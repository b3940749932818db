//! Animated transition task
//!
//! An animated move is modeled as an explicit task with a start instant,
//! a duration and a cancellation hook, instead of ad hoc listener
//! add/remove pairs. The engine samples it on every tick; when the
//! platform has no animation primitive of its own this step
//! interpolation *is* the transition, with identical external timing.

use crate::config::Easing;
use std::time::{Duration, Instant};

/// The single animating flag of the carousel, with its in-flight data
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Idle,
    Animating {
        from: f32,
        to: f32,
        /// Validated display index this transition resolves to
        target: usize,
        started: Instant,
        duration: Duration,
        easing: Easing,
    },
}

impl Transition {
    pub fn start(
        from: f32,
        to: f32,
        target: usize,
        started: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self::Animating {
            from,
            to,
            target,
            started,
            duration,
            easing,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Display index the in-flight transition resolves to
    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Animating { target, .. } => Some(*target),
            Self::Idle => None,
        }
    }

    /// Final slider offset of the in-flight transition
    pub fn destination(&self) -> Option<f32> {
        match self {
            Self::Animating { to, .. } => Some(*to),
            Self::Idle => None,
        }
    }

    pub fn finished(&self, now: Instant) -> bool {
        match self {
            Self::Idle => false,
            Self::Animating {
                started, duration, ..
            } => now.saturating_duration_since(*started) >= *duration,
        }
    }

    /// Eased slider offset at `now`
    pub fn sample(&self, now: Instant) -> Option<f32> {
        match self {
            Self::Idle => None,
            Self::Animating {
                from,
                to,
                started,
                duration,
                easing,
                ..
            } => {
                if duration.is_zero() {
                    return Some(*to);
                }
                let elapsed = now.saturating_duration_since(*started);
                let t = (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0);
                Some(from + (to - from) * easing.apply(t))
            }
        }
    }

    /// Cancellation hook for teardown and superseding snaps; returns
    /// whether a transition was actually in flight
    pub fn cancel(&mut self) -> bool {
        let was_animating = self.is_animating();
        *self = Self::Idle;
        was_animating
    }
}

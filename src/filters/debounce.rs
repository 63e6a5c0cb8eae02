//! Debounced filter-change scheduling.
//!
//! Rapid edits while the filter input is focused coalesce into a single
//! "filter changed" notification after a quiet period. Edits while the input
//! is unfocused, and focus loss with an edit still pending, notify
//! immediately. The scheduler is cooperatively driven: the host event loop
//! supplies the current [`Instant`] on every call and polls for timer expiry,
//! so at most one timer is live and no concurrency is involved.

use std::time::{Duration, Instant};

/// Default quiet period after the last edit before a notification fires.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending { deadline: Instant },
}

/// Debounce state machine for filter-input edits.
///
/// Every method that can emit returns `true` for exactly the calls that
/// should produce one "filter changed" notification.
#[derive(Debug, Clone)]
pub struct FilterScheduler {
    quiet_period: Duration,
    state: State,
    focused: bool,
}

impl FilterScheduler {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period, state: State::Idle, focused: true }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// Record an edit of the filter text at `now`.
    ///
    /// Focused: (re)start the single-shot timer and return `false` — rapid
    /// successive edits keep pushing the deadline out. Unfocused: nobody is
    /// typing, so return `true` to notify immediately.
    pub fn text_changed(&mut self, now: Instant) -> bool {
        if self.focused {
            self.state = State::Pending { deadline: now + self.quiet_period };
            false
        } else {
            self.state = State::Idle;
            true
        }
    }

    /// Record a focus change at `now`.
    ///
    /// Losing focus while an edit is pending cancels the timer and returns
    /// `true`: the pending notification is flushed rather than lost.
    pub fn set_focused(&mut self, focused: bool, _now: Instant) -> bool {
        self.focused = focused;
        if !focused && self.is_pending() {
            self.state = State::Idle;
            return true;
        }
        false
    }

    /// Check the timer at `now`; returns `true` once when the quiet period
    /// has elapsed since the last edit.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            State::Pending { deadline } if now >= deadline => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }
}

impl Default for FilterScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The four-state submission lifecycle and its banner timing.

use std::time::{Duration, Instant};

/// How long a success or error banner stays visible before the tracker
/// returns to idle.
pub const BANNER_INTERVAL: Duration = Duration::from_millis(3800);

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Tracks one contact form's submission lifecycle.
///
/// Transitions:
/// - idle/success/error → sending, on [`begin`](Self::begin);
/// - sending → success/error, on [`finish`](Self::finish);
/// - success/error → idle, once the banner interval elapses.
///
/// The `*_at` variants take an explicit instant so the banner timing is
/// testable without sleeping.
#[derive(Debug, Default)]
pub struct SubmitTracker {
    status: Status,
    banner_since: Option<Instant>,
}

impl SubmitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Starts a new submission. Returns `false` (and leaves the state
    /// untouched) if one is already in flight; starting from a success or
    /// error banner dismisses it.
    pub fn begin(&mut self) -> bool {
        if self.status == Status::Sending {
            return false;
        }
        self.status = Status::Sending;
        self.banner_since = None;
        true
    }

    /// Records the outcome of the in-flight submission.
    pub fn finish(&mut self, delivered: bool) {
        self.finish_at(delivered, Instant::now());
    }

    pub fn finish_at(&mut self, delivered: bool, now: Instant) {
        if self.status != Status::Sending {
            return;
        }
        self.status = if delivered {
            Status::Success
        } else {
            Status::Error
        };
        self.banner_since = Some(now);
    }

    /// Clears an expired banner back to idle. Call from the UI's tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if !matches!(self.status, Status::Success | Status::Error) {
            return;
        }
        let expired = self
            .banner_since
            .is_some_and(|since| now.duration_since(since) >= BANNER_INTERVAL);
        if expired {
            self.status = Status::Idle;
            self.banner_since = None;
        }
    }
}

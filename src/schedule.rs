//! Poll cadence.
//!
//! The interval is measured from the start of a cycle, so time spent
//! resolving and updating shrinks the idle gap instead of extending it.

use std::time::Duration;

use tokio::time::Instant;

use crate::report::Reporter;

/// Waits out the remainder of each poll interval.
///
/// # Example
///
/// ```
/// use ddnsup::schedule::Scheduler;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// let scheduler = Scheduler::new(Duration::from_secs(300));
/// let start = Instant::now();
/// assert_eq!(
///     scheduler.remaining(start, start + Duration::from_secs(400)),
///     Duration::ZERO
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    interval: Duration,
    refresh: Duration,
}

impl Scheduler {
    /// Default countdown refresh period.
    pub const DEFAULT_REFRESH: Duration = Duration::from_secs(1);

    /// Creates a scheduler with the given poll interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            refresh: Self::DEFAULT_REFRESH,
        }
    }

    /// Sets how often the countdown is reported while waiting.
    ///
    /// # Panics
    ///
    /// Panics if `refresh` is zero.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: Duration) -> Self {
        assert!(!refresh.is_zero(), "refresh must be non-zero");
        self.refresh = refresh;
        self
    }

    /// Returns the time left at `now` in the cycle that began at `cycle_start`.
    ///
    /// Never negative: once the interval is used up the result is zero.
    #[must_use]
    pub fn remaining(&self, cycle_start: Instant, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(cycle_start))
    }

    /// Blocks until `cycle_start + interval`, reporting the countdown.
    ///
    /// Returns at once if the cycle already consumed the whole interval.
    pub async fn wait_until_next<P: Reporter>(&self, cycle_start: Instant, reporter: &P) {
        loop {
            let remaining = self.remaining(cycle_start, Instant::now());
            if remaining.is_zero() {
                break;
            }

            reporter.countdown(remaining);
            tokio::time::sleep(remaining.min(self.refresh)).await;
        }

        reporter.countdown_finished();
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;

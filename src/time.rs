//! Wall-clock abstraction for testability.
//!
//! Poll timestamps shown on the status stream come from a [`Clock`], so
//! tests can pin them. Scheduling uses `tokio::time` instead, which tests
//! control by pausing the runtime.

use std::time::SystemTime;

/// Abstraction over system time.
///
/// # Example
///
/// ```
/// use ddnsup::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// assert!(clock.now() >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock delegating to [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockClock;
    use super::*;
    use std::time::Duration;

    #[test]
    fn system_clock_returns_current_time() {
        let before = SystemTime::now();
        let result = SystemClock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn mock_clock_can_advance() {
        let clock = MockClock::new(0);
        assert_eq!(clock.now(), SystemTime::UNIX_EPOCH);

        clock.advance(300);
        assert_eq!(
            clock.now(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(300)
        );
    }
}

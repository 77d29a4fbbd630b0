//! Default values for configuration options.

use std::time::Duration;

/// Default configuration file path.
pub const CONFIG_FILE: &str = "ddnsup.toml";

/// Default log file path.
pub const LOG_FILE: &str = "ddnsup.log";

/// Default interval between IP checks, in minutes.
pub const CHECK_INTERVAL_MINUTES: u64 = 5;

/// Longest accepted interval between IP checks, in minutes (one leap year).
pub const MAX_CHECK_INTERVAL_MINUTES: u64 = 366 * 24 * 60;

/// Default IP echo service.
pub const IP_CHECK_URL: &str = crate::resolver::DEFAULT_URL;

/// Default DNS update endpoint.
pub const UPDATE_URL: &str = crate::updater::DEFAULT_URL;

/// Default per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default per-request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}

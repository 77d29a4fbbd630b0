//! Outcome reporting.
//!
//! Everything the loop has to say goes through a [`Reporter`]. Two sinks
//! exist: the interactive status stream ([`ConsoleReporter`]) and the
//! durable log ([`LogReporter`]). A pair of reporters forwards every event
//! to both, so `(ConsoleReporter::stdout(), LogReporter)` is what the
//! binary uses.
//!
//! Reporting is fire-and-forget. Hooks return `()`, and a sink that fails
//! to write must swallow the failure rather than disturb the loop.

mod console;
mod log;

#[cfg(test)]
pub mod recording;

pub use console::{ConsoleReporter, format_remaining, format_timestamp};
pub use log::LogReporter;

use std::time::{Duration, SystemTime};

use crate::reconcile::{DomainRecord, UpdateOutcome};
use crate::resolver::ResolveError;

/// Receiver of loop progress events.
///
/// All hooks default to doing nothing so a sink only implements what it
/// displays.
#[allow(unused_variables)]
pub trait Reporter: Send + Sync {
    /// A poll cycle started.
    fn poll_started(&self, at: SystemTime) {}

    /// The public IP could not be determined; reconciliation is skipped.
    fn poll_failed(&self, error: &ResolveError) {}

    /// The public IP differs from the last synced one (`None` before the first sync).
    fn ip_changed(&self, previous: Option<&str>, current: &str) {}

    /// The public IP is unchanged and nothing needs updating.
    fn ip_unchanged(&self, ip: &str) {}

    /// Records that failed earlier are being attempted again.
    fn retrying(&self, count: usize, ip: &str) {}

    /// An update attempt for `record` (1-based `index` of `total`) is starting.
    fn update_started(&self, index: usize, total: usize, record: &DomainRecord) {}

    /// An update attempt finished.
    fn update_finished(&self, outcome: &UpdateOutcome) {}

    /// Time left until the next poll.
    fn countdown(&self, remaining: Duration) {}

    /// The wait for the next poll is over.
    fn countdown_finished(&self) {}
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn poll_started(&self, at: SystemTime) {
        self.0.poll_started(at);
        self.1.poll_started(at);
    }

    fn poll_failed(&self, error: &ResolveError) {
        self.0.poll_failed(error);
        self.1.poll_failed(error);
    }

    fn ip_changed(&self, previous: Option<&str>, current: &str) {
        self.0.ip_changed(previous, current);
        self.1.ip_changed(previous, current);
    }

    fn ip_unchanged(&self, ip: &str) {
        self.0.ip_unchanged(ip);
        self.1.ip_unchanged(ip);
    }

    fn retrying(&self, count: usize, ip: &str) {
        self.0.retrying(count, ip);
        self.1.retrying(count, ip);
    }

    fn update_started(&self, index: usize, total: usize, record: &DomainRecord) {
        self.0.update_started(index, total, record);
        self.1.update_started(index, total, record);
    }

    fn update_finished(&self, outcome: &UpdateOutcome) {
        self.0.update_finished(outcome);
        self.1.update_finished(outcome);
    }

    fn countdown(&self, remaining: Duration) {
        self.0.countdown(remaining);
        self.1.countdown(remaining);
    }

    fn countdown_finished(&self) {
        self.0.countdown_finished();
        self.1.countdown_finished();
    }
}

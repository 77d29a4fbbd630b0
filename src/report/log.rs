//! Durable log sink.

use std::time::SystemTime;

use crate::reconcile::UpdateOutcome;
use crate::resolver::ResolveError;

use super::{Reporter, format_timestamp};

/// Reporter that turns loop events into `tracing` events.
///
/// The subscriber installed at startup routes them, timestamped, to the
/// append-only log file. The countdown is not logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn poll_started(&self, at: SystemTime) {
        tracing::info!("Checking IP at {}", format_timestamp(at));
    }

    fn poll_failed(&self, error: &ResolveError) {
        tracing::warn!("Error getting public IP: {error}");
    }

    fn ip_changed(&self, previous: Option<&str>, current: &str) {
        tracing::info!(
            "IP changed from {} to {current}",
            previous.unwrap_or("<none>")
        );
    }

    fn ip_unchanged(&self, ip: &str) {
        tracing::info!("No IP change detected ({ip})");
    }

    fn retrying(&self, count: usize, ip: &str) {
        tracing::info!("Retrying {count} record(s) that failed to update to {ip}");
    }

    fn update_finished(&self, outcome: &UpdateOutcome) {
        if outcome.succeeded {
            tracing::info!(
                "Successfully updated DNS for {} to {}",
                outcome.record,
                outcome.ip
            );
        } else {
            tracing::error!(
                "Error updating DNS for {}: {}",
                outcome.record,
                outcome.detail
            );
        }
    }
}

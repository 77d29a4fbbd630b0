//! Updater that only logs what it would do.

use crate::reconcile::DomainRecord;

use super::{RecordUpdater, UpdateError};

/// A [`RecordUpdater`] that performs no network I/O.
///
/// Every update is logged and reported as successful. Used by `--dry-run`
/// to exercise the loop against a real IP echo service without touching DNS.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunUpdater;

impl RecordUpdater for DryRunUpdater {
    async fn update(&self, record: &DomainRecord, ip: &str) -> Result<(), UpdateError> {
        tracing::info!("Dry-run: would point {record} at {ip}");
        Ok(())
    }
}

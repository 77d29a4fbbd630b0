//! DNS record updates.
//!
//! This module provides:
//! - The updater seam used by the reconciliation loop ([`RecordUpdater`])
//! - The Namecheap dynamic DNS implementation ([`NamecheapUpdater`])
//! - A no-network variant for `--dry-run` ([`DryRunUpdater`])

mod dry_run;
mod error;
mod namecheap;


pub use dry_run::DryRunUpdater;
pub use error::UpdateError;
pub use namecheap::{DEFAULT_URL, NamecheapUpdater};

use crate::reconcile::DomainRecord;

/// Trait for pointing one DNS record at an IP address.
///
/// Each call is a single attempt; implementations must not retry.
pub trait RecordUpdater: Send + Sync {
    /// Updates `record` so that it resolves to `ip`.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError`] if the provider could not be reached or
    /// did not accept the update.
    fn update(
        &self,
        record: &DomainRecord,
        ip: &str,
    ) -> impl std::future::Future<Output = Result<(), UpdateError>> + Send;
}

//! Reconciliation loop core.
//!
//! This module provides:
//! - DNS record identity ([`DomainRecord`])
//! - Last-known IP state ([`IpState`])
//! - Per-record and per-cycle results ([`UpdateOutcome`], [`CycleReport`])
//! - The sync policy for failed records ([`SyncPolicy`])
//! - The poll/reconcile driver ([`Reconciler`])
//!
//! # Cycle
//!
//! Each cycle polls the resolver once. A failed poll leaves [`IpState`]
//! untouched and skips reconciliation. A successful poll whose address
//! differs from the last synced one fans out one update attempt to every
//! configured record, in configuration order, regardless of earlier
//! failures in the same cycle. Only after the whole fan-out does the synced
//! address advance.
//!
//! Under [`SyncPolicy::AdvanceOnAttempt`] a record that failed is not
//! attempted again until the address changes once more. This is surfaced
//! in the reports but not otherwise worked around.

mod outcome;
mod policy;
mod reconciler;
mod record;
mod state;

#[cfg(test)]
pub mod test_fixtures;

pub use outcome::{CycleReport, UpdateOutcome};
pub use policy::SyncPolicy;
pub use reconciler::Reconciler;
pub use record::DomainRecord;
pub use state::IpState;

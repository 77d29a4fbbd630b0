//! Per-record and per-cycle results.

use crate::resolver::ResolveError;

use super::DomainRecord;

/// Result of one update attempt for one record.
///
/// Produced once per record per fan-out, handed to the reporters, and
/// returned inside the [`CycleReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The record that was updated
    pub record: DomainRecord,
    /// Address the record was pointed at
    pub ip: String,
    /// Whether the provider accepted the update
    pub succeeded: bool,
    /// Failure detail; empty on success
    pub detail: String,
}

impl UpdateOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn success(record: DomainRecord, ip: impl Into<String>) -> Self {
        Self {
            record,
            ip: ip.into(),
            succeeded: true,
            detail: String::new(),
        }
    }

    /// Creates a failed outcome with the given detail.
    #[must_use]
    pub fn failure(record: DomainRecord, ip: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            record,
            ip: ip.into(),
            succeeded: false,
            detail: detail.into(),
        }
    }
}

/// What happened in one poll cycle.
#[derive(Debug)]
pub enum CycleReport {
    /// The resolver failed; state was left untouched.
    PollFailed(ResolveError),

    /// The address matched the last synced one and nothing was pending.
    Unchanged {
        /// The polled address
        ip: String,
    },

    /// The address changed (or this was the first sync) and every record
    /// was attempted.
    Reconciled {
        /// Address of the previous fan-out, `None` on the first sync
        previous: Option<String>,
        /// The polled address
        current: String,
        /// One outcome per configured record, in configuration order
        outcomes: Vec<UpdateOutcome>,
    },

    /// The address was unchanged but records that failed earlier were
    /// attempted again ([`SyncPolicy::RetryFailed`](super::SyncPolicy::RetryFailed) only).
    Retried {
        /// The polled address
        ip: String,
        /// One outcome per retried record, in configuration order
        outcomes: Vec<UpdateOutcome>,
    },
}

impl CycleReport {
    /// Returns the update outcomes of this cycle (empty if none were attempted).
    #[must_use]
    pub fn outcomes(&self) -> &[UpdateOutcome] {
        match self {
            Self::Reconciled { outcomes, .. } | Self::Retried { outcomes, .. } => outcomes,
            Self::PollFailed(_) | Self::Unchanged { .. } => &[],
        }
    }

    /// Returns the number of failed update attempts in this cycle.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes().iter().filter(|o| !o.succeeded).count()
    }

    /// Returns true if this cycle issued any update calls.
    #[must_use]
    pub const fn triggered(&self) -> bool {
        matches!(self, Self::Reconciled { .. } | Self::Retried { .. })
    }
}

//! Handling of records whose update failed.

use std::fmt;

/// What happens to records that failed to update.
///
/// In both policies the synced address advances once every record has been
/// attempted, so the next change is always detected against one baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Failed records wait for the next address change.
    #[default]
    AdvanceOnAttempt,

    /// Failed records are attempted again on every following cycle, even
    /// with an unchanged address, until they succeed.
    RetryFailed,
}

impl SyncPolicy {
    /// Maps the `retry_failed` configuration flag to a policy.
    #[must_use]
    pub const fn from_retry_flag(retry_failed: bool) -> Self {
        if retry_failed {
            Self::RetryFailed
        } else {
            Self::AdvanceOnAttempt
        }
    }
}

impl fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdvanceOnAttempt => write!(f, "advance-on-attempt"),
            Self::RetryFailed => write!(f, "retry-failed"),
        }
    }
}

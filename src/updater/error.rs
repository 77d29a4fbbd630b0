//! Error type for record updates.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for a single record update attempt.
///
/// Scoped to one record: it never affects sibling records in the same cycle.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The provider was reachable but did not answer `200 OK`.
    ///
    /// Providers usually explain the failure in the body
    /// (e.g. a bad password or an unknown record), so it is kept verbatim.
    #[error("update failed with status {}: {body}", status.as_u16())]
    Rejected {
        /// Status returned by the provider
        status: http::StatusCode,
        /// Response body
        body: String,
    },

    /// The provider could not be reached or the request timed out.
    #[error("network error: {0}")]
    Network(#[from] HttpError),
}

//! Error type for public IP discovery.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for a single IP discovery attempt.
///
/// Every variant is recoverable: the loop skips reconciliation for the
/// cycle and keeps the last known-good state.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request could not be completed or its body could not be read.
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// The echo service answered with a non-success status.
    #[error("IP service responded with status {status}")]
    Status {
        /// Status returned by the echo service
        status: http::StatusCode,
    },

    /// The echo service answered with a blank body.
    #[error("IP service returned an empty body")]
    EmptyBody,
}

//! Public IP discovery.
//!
//! This module provides:
//! - The resolver seam used by the reconciliation loop ([`IpResolver`])
//! - An implementation backed by a plain-text IP echo service ([`HttpResolver`])

mod echo;
mod error;


pub use echo::{DEFAULT_URL, HttpResolver};
pub use error::ResolveError;

/// Trait for discovering the caller's current public IP address.
///
/// The returned value is an opaque token: callers compare it by string
/// equality and never parse it.
///
/// Implementations make exactly one attempt per call. Retrying is the
/// caller's business (the next scheduled cycle).
pub trait IpResolver: Send + Sync {
    /// Returns the current public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the echo service could not be reached
    /// or did not return a usable answer.
    fn resolve(&self) -> impl std::future::Future<Output = Result<String, ResolveError>> + Send;
}

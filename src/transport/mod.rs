//! HTTP transport shared by the IP resolver and the record updater.
//!
//! This module provides:
//! - Request and response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client seam used by every outbound call ([`HttpClient`])
//! - The production client ([`ReqwestClient`])

mod client;
mod error;
mod request;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};

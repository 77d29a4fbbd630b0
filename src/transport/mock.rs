//! Scripted HTTP client for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// A mock [`HttpClient`] that replays a scripted sequence of results
/// and records every request it receives.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    /// Creates a client that answers with `responses` in order.
    #[must_use]
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a client that answers once with the given status and body.
    #[must_use]
    pub fn replying(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::with_text(status, body))])
    }

    /// Creates a client whose single request fails with `error`.
    #[must_use]
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Returns every request received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (only in test code).
    #[must_use]
    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockClient ran out of scripted responses")
    }
}

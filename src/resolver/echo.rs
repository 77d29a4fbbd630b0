//! Resolver backed by a plain-text IP echo service.

use url::Url;

use crate::transport::{HttpClient, HttpRequest};

use super::{IpResolver, ResolveError};

/// Default IP echo endpoint.
pub const DEFAULT_URL: &str = "https://api.ipify.org";

/// Resolves the public IP by issuing a GET to an echo service that
/// answers with the caller's address as a plain-text body.
///
/// # Example
///
/// ```
/// use ddnsup::resolver::HttpResolver;
/// use ddnsup::transport::ReqwestClient;
///
/// let resolver = HttpResolver::with_default_url(ReqwestClient::new());
/// assert_eq!(resolver.url().as_str(), "https://api.ipify.org/");
/// ```
#[derive(Debug, Clone)]
pub struct HttpResolver<H> {
    client: H,
    url: Url,
}

impl<H> HttpResolver<H> {
    /// Creates a resolver that queries `url`.
    #[must_use]
    pub const fn new(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Creates a resolver that queries [`DEFAULT_URL`].
    ///
    /// # Panics
    ///
    /// Never in practice: the default URL is a valid constant.
    #[must_use]
    pub fn with_default_url(client: H) -> Self {
        let url = Url::parse(DEFAULT_URL).expect("DEFAULT_URL is a valid URL");
        Self::new(client, url)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the echo service URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl<H: HttpClient> IpResolver for HttpResolver<H> {
    async fn resolve(&self) -> Result<String, ResolveError> {
        let response = self.client.request(HttpRequest::get(self.url.clone())).await?;

        if !response.is_success() {
            return Err(ResolveError::Status {
                status: response.status,
            });
        }

        let ip = response.body_text().trim().to_string();
        if ip.is_empty() {
            return Err(ResolveError::EmptyBody);
        }

        tracing::debug!("Echo service {} reported {ip}", self.url);
        Ok(ip)
    }
}

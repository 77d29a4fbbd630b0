//! Namecheap dynamic DNS updater.

use url::Url;

use crate::reconcile::DomainRecord;
use crate::transport::{HttpClient, HttpRequest};

use super::{RecordUpdater, UpdateError};

/// Default Namecheap dynamic DNS update endpoint.
pub const DEFAULT_URL: &str = "https://dynamicdns.park-your-domain.com/update";

/// Updates records through the Namecheap dynamic DNS GET endpoint.
///
/// The record's host, domain, and credential plus the target IP are sent
/// as query parameters. The protocol carries the credential in the URL;
/// it is percent-encoded but otherwise sent as is.
///
/// # Example
///
/// ```
/// use ddnsup::transport::ReqwestClient;
/// use ddnsup::updater::NamecheapUpdater;
///
/// let updater = NamecheapUpdater::with_default_url(ReqwestClient::new());
/// assert_eq!(updater.url().host_str(), Some("dynamicdns.park-your-domain.com"));
/// ```
#[derive(Debug, Clone)]
pub struct NamecheapUpdater<H> {
    client: H,
    url: Url,
}

impl<H> NamecheapUpdater<H> {
    /// Creates an updater that sends requests to `url`.
    #[must_use]
    pub const fn new(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Creates an updater that sends requests to [`DEFAULT_URL`].
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

    /// Returns the update endpoint.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Builds the update request for `record` pointing at `ip`.
    #[must_use]
    pub fn build_request(&self, record: &DomainRecord, ip: &str) -> HttpRequest {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("host", &record.host)
            .append_pair("domain", &record.domain)
            .append_pair("password", &record.credential)
            .append_pair("ip", ip);

        HttpRequest::get(url)
    }
}

impl<H: HttpClient> RecordUpdater for NamecheapUpdater<H> {
    async fn update(&self, record: &DomainRecord, ip: &str) -> Result<(), UpdateError> {
        let response = self.client.request(self.build_request(record, ip)).await?;

        if response.is_ok() {
            return Ok(());
        }

        Err(UpdateError::Rejected {
            status: response.status,
            body: response.body_text(),
        })
    }
}

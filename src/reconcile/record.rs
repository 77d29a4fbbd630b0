//! DNS record identity.

use std::fmt;

/// One DNS host record kept in sync with the public IP.
///
/// Loaded once at startup and never mutated. The credential is passed
/// verbatim to the provider and never printed: both `Display` and `Debug`
/// leave it out.
#[derive(Clone, PartialEq, Eq)]
pub struct DomainRecord {
    /// Registered domain, e.g. `example.com`
    pub domain: String,
    /// Record name within the domain, e.g. `@` or `www`
    pub host: String,
    /// Provider update credential
    pub credential: String,
}

impl DomainRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        host: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            host: host.into(),
            credential: credential.into(),
        }
    }
}

impl fmt::Display for DomainRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.host, self.domain)
    }
}

impl fmt::Debug for DomainRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainRecord")
            .field("domain", &self.domain)
            .field("host", &self.host)
            .field("credential", &"<redacted>")
            .finish()
    }
}

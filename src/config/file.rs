//! Configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The same
//! structure is read from TOML or JSON depending on the file name.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document (the default)
    Toml,
    /// JSON document, selected by a `.json` extension
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file name: `.json` (any case) is JSON,
    /// everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Root structure of the configuration file.
///
/// Everything except `domains` is optional and falls back to CLI arguments
/// or built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// DNS records to keep in sync, in update order
    #[serde(default)]
    pub domains: Vec<RecordEntry>,

    /// Minutes between IP checks (0 means the default)
    pub check_interval_minutes: Option<u64>,

    /// Path to the log file
    pub log_file: Option<String>,

    /// Retry failed records on every check
    #[serde(default)]
    pub retry_failed: bool,

    /// URL of the public IP echo service
    pub ip_check_url: Option<String>,

    /// URL of the dynamic DNS update endpoint
    pub update_url: Option<String>,
}

/// One entry of the `domains` array.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    /// Zone name, e.g. `example.com`
    pub domain: String,

    /// Host label within the zone, e.g. `@` or `www`
    pub host: String,

    /// Dynamic DNS password for the zone
    #[serde(alias = "credential")]
    pub password: String,
}

impl fmt::Debug for RecordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordEntry")
            .field("domain", &self.domain)
            .field("host", &self.host)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl FileConfig {
    /// Loads configuration from a file, choosing the parser from its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_as(&content, ConfigFormat::from_path(path))
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_as(content, ConfigFormat::Toml)
    }

    /// Parses configuration in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has unknown fields.
    pub fn parse_as(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Generates a default configuration file template.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ddnsup configuration

# Minutes between IP checks (default: 5)
check_interval_minutes = 5

# Append-only log file
log_file = "ddnsup.log"

# Keep retrying records whose update failed on every check instead of
# waiting for the next IP change
retry_failed = false

# Public IP echo service; must answer with the bare address
# ip_check_url = "https://api.ipify.org"

# Dynamic DNS update endpoint
# update_url = "https://dynamicdns.park-your-domain.com/update"

# One block per host record. Records are updated in this order.
[[domains]]
domain = "example.com"
host = "@"
password = "your-dynamic-dns-password"

[[domains]]
domain = "example.com"
host = "www"
password = "your-dynamic-dns-password"
"#
    .to_string()
}

//! Validated configuration after merging CLI and file sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::reconcile::{DomainRecord, SyncPolicy};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::file::{FileConfig, RecordEntry};

/// Fully validated configuration ready for use by the application.
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and a parsed
/// file, or [`ValidatedConfig::load`] to read the file named on the
/// command line.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Records to keep in sync, in update order (never empty)
    pub records: Vec<DomainRecord>,

    /// Time between the starts of consecutive checks
    pub interval: Duration,

    /// Append-only log file
    pub log_file: PathBuf,

    /// Public IP echo service
    pub ip_check_url: Url,

    /// Dynamic DNS update endpoint
    pub update_url: Url,

    /// What to do with records that failed to update
    pub sync_policy: SyncPolicy,

    /// Dry-run mode (log updates without sending them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records = self
            .records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Config {{ records: [{}], interval: {}s, log_file: {}, ip_check_url: {}, \
             update_url: {}, policy: {}, dry_run: {} }}",
            records,
            self.interval.as_secs(),
            self.log_file.display(),
            self.ip_check_url,
            self.update_url,
            self.sync_policy,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and a parsed file.
    ///
    /// CLI arguments take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file lists no records
    /// - A record has an empty domain, host or password
    /// - A URL is invalid
    /// - The interval exceeds [`defaults::MAX_CHECK_INTERVAL_MINUTES`]
    pub fn from_raw(cli: &Cli, file: &FileConfig) -> Result<Self, ConfigError> {
        let records = Self::build_records(&file.domains)?;

        let interval = Self::resolve_interval(cli, file)?;

        let log_file = cli
            .log_file
            .clone()
            .or_else(|| file.log_file.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(defaults::LOG_FILE));

        let ip_check_url = parse_url(
            cli.ip_check_url
                .as_deref()
                .or(file.ip_check_url.as_deref())
                .unwrap_or(defaults::IP_CHECK_URL),
        )?;

        let update_url = parse_url(
            cli.update_url
                .as_deref()
                .or(file.update_url.as_deref())
                .unwrap_or(defaults::UPDATE_URL),
        )?;

        let sync_policy = SyncPolicy::from_retry_flag(cli.retry_failed || file.retry_failed);

        Ok(Self {
            records,
            interval,
            log_file,
            ip_check_url,
            update_url,
            sync_policy,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads the configuration file named by `cli.config` and merges it
    /// with the CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = FileConfig::load(&cli.config)?;
        Self::from_raw(cli, &file)
    }

    fn build_records(entries: &[RecordEntry]) -> Result<Vec<DomainRecord>, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::missing(
                field::DOMAINS,
                "Add at least one [[domains]] entry to the config file",
            ));
        }

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let index = i + 1;
                for (name, value) in [
                    ("domain", &entry.domain),
                    ("host", &entry.host),
                    ("password", &entry.password),
                ] {
                    if value.trim().is_empty() {
                        return Err(ConfigError::InvalidRecord {
                            index,
                            reason: format!("{name} must not be empty"),
                        });
                    }
                }
                Ok(DomainRecord::new(
                    entry.domain.trim(),
                    entry.host.trim(),
                    entry.password.as_str(),
                ))
            })
            .collect()
    }

    fn resolve_interval(cli: &Cli, file: &FileConfig) -> Result<Duration, ConfigError> {
        // A zero from either source counts as unset
        let minutes = cli
            .interval
            .filter(|&m| m > 0)
            .or(file.check_interval_minutes.filter(|&m| m > 0))
            .unwrap_or(defaults::CHECK_INTERVAL_MINUTES);

        if minutes > defaults::MAX_CHECK_INTERVAL_MINUTES {
            return Err(ConfigError::InvalidDuration {
                field: field::CHECK_INTERVAL,
                reason: format!(
                    "{minutes} minutes exceeds the maximum of {}",
                    defaults::MAX_CHECK_INTERVAL_MINUTES
                ),
            });
        }

        Ok(Duration::from_secs(minutes * 60))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

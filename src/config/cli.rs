//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// ddnsup: keeps DNS host records pointed at this machine's public IP.
///
/// Polls a public IP echo service on a fixed interval and updates every
/// configured record through the provider's dynamic DNS endpoint whenever
/// the address changes.
#[derive(Debug, Parser)]
#[command(name = "ddnsup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (`.json` files are read as JSON, others as TOML)
    #[arg(long, short, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Minutes between IP checks
    #[arg(long, value_name = "MINUTES")]
    pub interval: Option<u64>,

    /// Path to the append-only log file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Retry records that failed to update on every check, not only after the next IP change
    #[arg(long = "retry-failed")]
    pub retry_failed: bool,

    /// URL of the public IP echo service
    #[arg(long = "ip-check-url", value_name = "URL")]
    pub ip_check_url: Option<String>,

    /// URL of the dynamic DNS update endpoint
    #[arg(long = "update-url", value_name = "URL")]
    pub update_url: Option<String>,

    /// Test mode - poll the IP and log updates without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ddnsup
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}

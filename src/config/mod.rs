//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Configuration file parsing ([`FileConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Configuration file**
//! 3. **Built-in defaults**
//!
//! The record list only comes from the configuration file.
//!
//! # File Format
//!
//! The file is a flat document with a `domains` array. It is parsed as TOML
//! unless its name ends in `.json`, in which case the same fields are read
//! from JSON:
//!
//! ```toml
//! check_interval_minutes = 5
//! log_file = "ddnsup.log"
//!
//! [[domains]]
//! domain = "example.com"
//! host = "@"
//! password = "..."
//! ```
//!
//! # Boolean Flag Semantics
//!
//! `--retry-failed` uses OR semantics: if set in either the CLI or the file,
//! the result is `true`.

mod cli;
pub mod defaults;
mod error;
mod file;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use file::{ConfigFormat, FileConfig, RecordEntry, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

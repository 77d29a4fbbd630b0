//! ddnsup: a small Dynamic DNS client.
//!
//! Polls a public IP echo service on a fixed interval and pushes the
//! address to every configured DNS host record whenever it changes.
//!
//! The pieces are:
//! - [`resolver`]: discovers the public IP
//! - [`updater`]: pushes an IP to one DNS record
//! - [`reconcile`]: decides when to update and fans out to all records
//! - [`schedule`]: paces cycles and drives the countdown
//! - [`report`]: console and log output
//! - [`config`]: CLI and configuration file

pub mod config;
pub mod reconcile;
pub mod report;
pub mod resolver;
pub mod schedule;
pub mod time;
pub mod transport;
pub mod updater;

//! Scripted collaborators for reconciliation tests.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use crate::resolver::{IpResolver, ResolveError};
use crate::transport::HttpError;
use crate::updater::{RecordUpdater, UpdateError};

use super::DomainRecord;

/// A resolver that replays a scripted sequence of poll results.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    results: Mutex<VecDeque<Result<String, ResolveError>>>,
    calls: Mutex<usize>,
}

impl ScriptedResolver {
    /// Creates a resolver answering with `results` in order.
    #[must_use]
    pub fn new(results: Vec<Result<String, ResolveError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(0),
        }
    }

    /// Creates a resolver that always succeeds, returning `ips` in order.
    #[must_use]
    pub fn returning(ips: &[&str]) -> Self {
        Self::new(ips.iter().map(|ip| Ok((*ip).to_string())).collect())
    }

    /// Number of resolve calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl IpResolver for ScriptedResolver {
    async fn resolve(&self) -> Result<String, ResolveError> {
        *self.calls.lock().unwrap() += 1;
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedResolver ran out of scripted results")
    }
}

/// Creates a network-level resolver failure.
#[must_use]
pub fn resolver_down() -> Result<String, ResolveError> {
    Err(ResolveError::Network(HttpError::Connection(
        "connection refused".into(),
    )))
}

/// An updater that records every call and rejects chosen hosts.
#[derive(Debug, Default)]
pub struct RecordingUpdater {
    failing_hosts: Mutex<HashSet<String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingUpdater {
    /// Creates an updater that accepts every update.
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Creates an updater that rejects records whose host is in `hosts`.
    #[must_use]
    pub fn rejecting(hosts: &[&str]) -> Self {
        let updater = Self::default();
        updater.set_rejected(hosts);
        updater
    }

    /// Replaces the set of rejected hosts.
    pub fn set_rejected(&self, hosts: &[&str]) {
        *self.failing_hosts.lock().unwrap() = hosts.iter().map(|h| (*h).to_string()).collect();
    }

    /// Returns every `(record, ip)` update attempted so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Forgets the recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl RecordUpdater for RecordingUpdater {
    async fn update(&self, record: &DomainRecord, ip: &str) -> Result<(), UpdateError> {
        self.calls
            .lock()
            .unwrap()
            .push((record.to_string(), ip.to_string()));

        if self.failing_hosts.lock().unwrap().contains(&record.host) {
            return Err(UpdateError::Rejected {
                status: http::StatusCode::INTERNAL_SERVER_ERROR,
                body: "Invalid Password".to_string(),
            });
        }

        Ok(())
    }
}

/// The two records from the reference scenario: `@` and `www` under `example.com`.
#[must_use]
pub fn example_records() -> Vec<DomainRecord> {
    vec![
        DomainRecord::new("example.com", "@", "apex-secret"),
        DomainRecord::new("example.com", "www", "www-secret"),
    ]
}

/// `count` records named `h0`, `h1`, ... under `example.com`.
#[must_use]
pub fn numbered_records(count: usize) -> Vec<DomainRecord> {
    (0..count)
        .map(|i| DomainRecord::new("example.com", format!("h{i}"), format!("pw{i}")))
        .collect()
}

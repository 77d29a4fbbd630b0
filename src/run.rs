//! Application execution logic.
//!
//! Wires the resolver, updater and reporters together and drives the
//! reconciler until a shutdown signal arrives.

use std::time::Duration;

use thiserror::Error;
use tokio::signal;
use url::Url;

use ddnsup::config::{ValidatedConfig, defaults};
use ddnsup::reconcile::{DomainRecord, Reconciler, SyncPolicy};
use ddnsup::report::{ConsoleReporter, LogReporter};
use ddnsup::resolver::HttpResolver;
use ddnsup::schedule::Scheduler;
use ddnsup::transport::ReqwestClient;
use ddnsup::updater::{DryRunUpdater, NamecheapUpdater, RecordUpdater};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the async runtime.
    #[error("Failed to create Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Runtime options extracted from validated config.
///
/// Holds everything the loop needs besides the records, which are moved
/// into the reconciler.
#[derive(Debug, Clone)]
struct RuntimeOptions {
    interval: Duration,
    sync_policy: SyncPolicy,
    dry_run: bool,
    ip_check_url: Url,
    update_url: Url,
}

impl From<&ValidatedConfig> for RuntimeOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            interval: config.interval,
            sync_policy: config.sync_policy,
            dry_run: config.dry_run,
            ip_check_url: config.ip_check_url.clone(),
            update_url: config.update_url.clone(),
        }
    }
}

/// Builds a current-thread runtime and runs the update loop on it.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created. Network and
/// provider failures never end the loop.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    let options = RuntimeOptions::from(&config);
    runtime.block_on(run_loop(options, config.records));
    Ok(())
}

/// Runs the update loop until Ctrl+C or SIGTERM.
///
/// Excluded from coverage - requires network access and signal handling.
#[cfg(not(tarpaulin_include))]
async fn run_loop(options: RuntimeOptions, records: Vec<DomainRecord>) {
    let client = ReqwestClient::new().with_timeout(defaults::request_timeout());
    let resolver = HttpResolver::new(client.clone(), options.ip_check_url.clone());

    println!("Starting Dynamic DNS updater...");
    tracing::info!(
        "Starting Dynamic DNS updater for {} record(s), checking every {}s ({})",
        records.len(),
        options.interval.as_secs(),
        options.sync_policy,
    );

    if options.dry_run {
        tracing::info!("Dry-run mode enabled - updates will be logged but not sent");
        drive(resolver, DryRunUpdater, records, &options).await;
    } else {
        let updater = NamecheapUpdater::new(client, options.update_url.clone());
        drive(resolver, updater, records, &options).await;
    }

    println!();
    tracing::info!("Shutdown signal received, stopping...");
}

/// Builds the reconciler for one updater flavour and runs it.
#[cfg(not(tarpaulin_include))]
async fn drive<U: RecordUpdater>(
    resolver: HttpResolver<ReqwestClient>,
    updater: U,
    records: Vec<DomainRecord>,
    options: &RuntimeOptions,
) {
    let mut reconciler =
        Reconciler::new(resolver, updater, records).with_policy(options.sync_policy);
    let scheduler = Scheduler::new(options.interval);
    let reporter = (ConsoleReporter::stdout(), LogReporter);

    reconciler
        .run_until(&scheduler, &reporter, shutdown_signal())
        .await;
}

/// Returns a future that completes when a shutdown signal is received.
///
/// A handler that cannot be installed is logged and never fires.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

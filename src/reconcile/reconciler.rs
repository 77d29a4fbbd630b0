//! Poll/reconcile driver.

use std::future::Future;

use tokio::time::Instant;

use crate::report::Reporter;
use crate::resolver::IpResolver;
use crate::schedule::Scheduler;
use crate::time::{Clock, SystemClock};
use crate::updater::RecordUpdater;

use super::{CycleReport, DomainRecord, IpState, SyncPolicy, UpdateOutcome};

/// Keeps a fixed set of DNS records pointed at the public IP.
///
/// Owns the [`IpState`] exclusively; the resolver and updater are injected
/// so tests can script them.
///
/// # Type Parameters
///
/// * `R` - The [`IpResolver`] used to poll the public IP
/// * `U` - The [`RecordUpdater`] used for each record
/// * `C` - The [`Clock`] for poll timestamps (defaults to [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use ddnsup::reconcile::{DomainRecord, Reconciler};
/// use ddnsup::report::ConsoleReporter;
/// use ddnsup::resolver::HttpResolver;
/// use ddnsup::transport::ReqwestClient;
/// use ddnsup::updater::NamecheapUpdater;
///
/// # async fn example() {
/// let client = ReqwestClient::new();
/// let records = vec![DomainRecord::new("example.com", "@", "secret")];
/// let mut reconciler = Reconciler::new(
///     HttpResolver::with_default_url(client.clone()),
///     NamecheapUpdater::with_default_url(client),
///     records,
/// );
///
/// let report = reconciler.run_cycle(&ConsoleReporter::stdout()).await;
/// println!("{} failure(s)", report.failures());
/// # }
/// ```
#[derive(Debug)]
pub struct Reconciler<R, U, C = SystemClock> {
    resolver: R,
    updater: U,
    clock: C,
    records: Vec<DomainRecord>,
    policy: SyncPolicy,
    state: IpState,
    /// Indices of records awaiting a retry (only under `RetryFailed`)
    pending: Vec<usize>,
}

impl<R, U> Reconciler<R, U, SystemClock> {
    /// Creates a reconciler for `records`, in the given order.
    #[must_use]
    pub fn new(resolver: R, updater: U, records: Vec<DomainRecord>) -> Self {
        Self {
            resolver,
            updater,
            clock: SystemClock,
            records,
            policy: SyncPolicy::AdvanceOnAttempt,
            state: IpState::new(),
            pending: Vec::new(),
        }
    }
}

impl<R, U, C> Reconciler<R, U, C> {
    /// Replaces the clock used for poll timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> Reconciler<R, U, C2> {
        Reconciler {
            resolver: self.resolver,
            updater: self.updater,
            clock,
            records: self.records,
            policy: self.policy,
            state: self.state,
            pending: self.pending,
        }
    }

    /// Sets the policy for records whose update failed.
    #[must_use]
    pub fn with_policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the IP state.
    #[must_use]
    pub const fn state(&self) -> &IpState {
        &self.state
    }

    /// Returns the records waiting to be retried, in configuration order.
    pub fn pending(&self) -> impl Iterator<Item = &DomainRecord> {
        self.pending.iter().map(|&index| &self.records[index])
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the updater.
    #[must_use]
    pub const fn updater(&self) -> &U {
        &self.updater
    }
}

impl<R, U, C> Reconciler<R, U, C>
where
    R: IpResolver,
    U: RecordUpdater,
    C: Clock,
{
    /// Runs one poll cycle and, if needed, one fan-out.
    ///
    /// Never fails: a resolver error is returned as
    /// [`CycleReport::PollFailed`] and per-record errors are carried in the
    /// outcomes.
    pub async fn run_cycle<P: Reporter>(&mut self, reporter: &P) -> CycleReport {
        reporter.poll_started(self.clock.now());

        let ip = match self.resolver.resolve().await {
            Ok(ip) => ip,
            Err(e) => {
                reporter.poll_failed(&e);
                return CycleReport::PollFailed(e);
            }
        };

        self.state.observe(&ip);

        if self.state.differs_from_previous(&ip) {
            let previous = self.state.previous().map(ToString::to_string);
            reporter.ip_changed(previous.as_deref(), &ip);

            let targets: Vec<usize> = (0..self.records.len()).collect();
            let outcomes = self.fan_out(&targets, &ip, reporter).await;

            // Advance only after every record has been attempted.
            self.state.commit();
            self.remember_failures(&targets, &outcomes);

            return CycleReport::Reconciled {
                previous,
                current: ip,
                outcomes,
            };
        }

        if !self.pending.is_empty() {
            let targets = std::mem::take(&mut self.pending);
            reporter.retrying(targets.len(), &ip);

            let outcomes = self.fan_out(&targets, &ip, reporter).await;
            self.remember_failures(&targets, &outcomes);

            return CycleReport::Retried { ip, outcomes };
        }

        reporter.ip_unchanged(&ip);
        CycleReport::Unchanged { ip }
    }

    /// Runs cycles on the scheduler's cadence until `shutdown` completes.
    ///
    /// `shutdown` is only observed between cycles: a cycle in progress
    /// always runs to completion.
    pub async fn run_until<P, F>(&mut self, scheduler: &Scheduler, reporter: &P, shutdown: F)
    where
        P: Reporter,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let cycle_start = Instant::now();
            let report = self.run_cycle(reporter).await;

            if report.failures() > 0 {
                tracing::warn!(
                    "{} record(s) failed to update; they will be retried {}",
                    report.failures(),
                    match self.policy {
                        SyncPolicy::AdvanceOnAttempt => "after the next IP change",
                        SyncPolicy::RetryFailed => "on the next check",
                    }
                );
            }

            tokio::select! {
                biased;

                () = &mut shutdown => return,

                () = scheduler.wait_until_next(cycle_start, reporter) => {}
            }
        }
    }

    /// Issues one update per target record, in order, whatever the outcome
    /// of the previous ones.
    async fn fan_out<P: Reporter>(
        &self,
        targets: &[usize],
        ip: &str,
        reporter: &P,
    ) -> Vec<UpdateOutcome> {
        let total = targets.len();
        let mut outcomes = Vec::with_capacity(total);

        for (position, &index) in targets.iter().enumerate() {
            let record = &self.records[index];
            reporter.update_started(position + 1, total, record);

            let outcome = match self.updater.update(record, ip).await {
                Ok(()) => UpdateOutcome::success(record.clone(), ip),
                Err(e) => UpdateOutcome::failure(record.clone(), ip, e.to_string()),
            };

            reporter.update_finished(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    fn remember_failures(&mut self, targets: &[usize], outcomes: &[UpdateOutcome]) {
        self.pending = match self.policy {
            SyncPolicy::AdvanceOnAttempt => Vec::new(),
            SyncPolicy::RetryFailed => targets
                .iter()
                .zip(outcomes)
                .filter(|(_, outcome)| !outcome.succeeded)
                .map(|(&index, _)| index)
                .collect(),
        };
    }
}

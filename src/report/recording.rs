//! Reporter that records events for assertions.

use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::reconcile::{DomainRecord, UpdateOutcome};
use crate::resolver::ResolveError;

use super::Reporter;

/// One recorded reporter event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PollStarted(SystemTime),
    PollFailed(String),
    IpChanged(Option<String>, String),
    IpUnchanged(String),
    Retrying(usize, String),
    UpdateStarted(usize, usize, String),
    UpdateFinished { record: String, succeeded: bool, detail: String },
    Countdown(Duration),
    CountdownFinished,
}

/// A [`Reporter`] that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    /// Returns the events recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (only in test code).
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the recorded `UpdateFinished` events as `(record, succeeded, detail)`.
    #[must_use]
    pub fn finished_updates(&self) -> Vec<(String, bool, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::UpdateFinished {
                    record,
                    succeeded,
                    detail,
                } => Some((record, succeeded, detail)),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded countdown values.
    #[must_use]
    pub fn countdowns(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Countdown(remaining) => Some(remaining),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn poll_started(&self, at: SystemTime) {
        self.push(Event::PollStarted(at));
    }

    fn poll_failed(&self, error: &ResolveError) {
        self.push(Event::PollFailed(error.to_string()));
    }

    fn ip_changed(&self, previous: Option<&str>, current: &str) {
        self.push(Event::IpChanged(
            previous.map(str::to_string),
            current.to_string(),
        ));
    }

    fn ip_unchanged(&self, ip: &str) {
        self.push(Event::IpUnchanged(ip.to_string()));
    }

    fn retrying(&self, count: usize, ip: &str) {
        self.push(Event::Retrying(count, ip.to_string()));
    }

    fn update_started(&self, index: usize, total: usize, record: &DomainRecord) {
        self.push(Event::UpdateStarted(index, total, record.to_string()));
    }

    fn update_finished(&self, outcome: &UpdateOutcome) {
        self.push(Event::UpdateFinished {
            record: outcome.record.to_string(),
            succeeded: outcome.succeeded,
            detail: outcome.detail.clone(),
        });
    }

    fn countdown(&self, remaining: Duration) {
        self.push(Event::Countdown(remaining));
    }

    fn countdown_finished(&self) {
        self.push(Event::CountdownFinished);
    }
}

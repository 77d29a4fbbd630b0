//! Interactive status stream.

use std::fmt::Write as _;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};

use crate::reconcile::{DomainRecord, UpdateOutcome};
use crate::resolver::ResolveError;

use super::Reporter;

/// Human-readable progress written to a terminal (or any writer).
///
/// Per-record progress is printed as `Updating 1/2: www.example.com...`
/// followed on the same line by `SUCCESS` or `FAILED: <detail>`. The
/// countdown rewrites a single line with `\r`.
///
/// Write errors are ignored.
#[derive(Debug)]
pub struct ConsoleReporter<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn emit(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn poll_started(&self, at: SystemTime) {
        self.emit(&format!("\nChecking IP at {}\n", format_timestamp(at)));
    }

    fn poll_failed(&self, error: &ResolveError) {
        self.emit(&format!("Error getting public IP: {error}\n"));
    }

    fn ip_changed(&self, previous: Option<&str>, current: &str) {
        let line = previous.map_or_else(
            || format!("Initial IP is {current}\n"),
            |previous| format!("IP changed from {previous} to {current}\n"),
        );
        self.emit(&line);
    }

    fn ip_unchanged(&self, _ip: &str) {
        self.emit("No IP change detected\n");
    }

    fn retrying(&self, count: usize, ip: &str) {
        self.emit(&format!("Retrying {count} failed record(s) at {ip}\n"));
    }

    fn update_started(&self, index: usize, total: usize, record: &DomainRecord) {
        self.emit(&format!("Updating {index}/{total}: {record}..."));
    }

    fn update_finished(&self, outcome: &UpdateOutcome) {
        if outcome.succeeded {
            self.emit("SUCCESS\n");
        } else {
            self.emit(&format!("FAILED: {}\n", outcome.detail));
        }
    }

    fn countdown(&self, remaining: Duration) {
        // Trailing spaces clear leftovers from a longer previous value.
        self.emit(&format!("\rNext check in: {}   ", format_remaining(remaining)));
    }

    fn countdown_finished(&self) {
        self.emit("\n");
    }
}

/// Formats a wall-clock time in local time, RFC 2822 style.
#[must_use]
pub fn format_timestamp(at: SystemTime) -> String {
    DateTime::<Local>::from(at).to_rfc2822()
}

/// Formats a duration rounded to whole seconds, e.g. `1h2m3s`, `4m59s`, `7s`.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let mut secs = remaining.as_secs();
    if remaining.subsec_millis() >= 500 {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut text = String::new();
    if hours > 0 {
        let _ = write!(text, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(text, "{minutes}m");
    }
    let _ = write!(text, "{seconds}s");
    text
}

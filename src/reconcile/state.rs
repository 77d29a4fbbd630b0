//! Last-known IP state.

/// The loop's only mutable state carried between cycles.
///
/// `previous` is `None` until the first fan-out has completed, so the first
/// successful poll always counts as a change. Addresses are opaque tokens
/// compared by string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpState {
    current: Option<String>,
    previous: Option<String>,
}

impl IpState {
    /// Creates an empty state (never polled, never synced).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }

    /// The address from the most recent successful poll.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The address used by the most recent completed fan-out.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Returns true if `ip` differs from the last synced address.
    #[must_use]
    pub fn differs_from_previous(&self, ip: &str) -> bool {
        self.previous.as_deref() != Some(ip)
    }

    /// Records the address from a successful poll.
    pub fn observe(&mut self, ip: &str) {
        self.current = Some(ip.to_string());
    }

    /// Marks the current address as synced.
    ///
    /// Called once per fan-out, after every record has been attempted.
    pub fn commit(&mut self) {
        self.previous.clone_from(&self.current);
    }
}

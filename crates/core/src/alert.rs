//! Transient user-facing messages.
//!
//! The feed is pure state: it never reads the clock, callers pass an
//! `Instant` into every time-sensitive operation. Frontends render the
//! active alerts however they like (the terminal adapter prints them; a
//! screen UI would draw them at the top of its container).

use std::time::{Duration, Instant};

/// How long an alert stays active before it expires.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

/// Severity of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Danger,
}

impl AlertLevel {
    /// CSS-style class name for this level.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// A single transient message.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
    posted_at: Instant,
}

impl Alert {
    /// Whether this alert has outlived [`ALERT_TTL`].
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= ALERT_TTL
    }
}

/// Ordered feed of transient messages, newest first.
#[derive(Debug, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a message; returns its id for later dismissal.
    ///
    /// New alerts go to the front of the feed.
    pub fn post(&mut self, level: AlertLevel, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.insert(
            0,
            Alert {
                id,
                level,
                message: message.into(),
                posted_at: now,
            },
        );
        id
    }

    /// Post an informational message.
    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.post(AlertLevel::Info, message, now)
    }

    /// Post a success message.
    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.post(AlertLevel::Success, message, now)
    }

    /// Post an error message.
    pub fn danger(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.post(AlertLevel::Danger, message, now)
    }

    /// Dismiss an alert before it expires. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    /// Drop expired alerts and return the ones still active, newest first.
    pub fn active(&mut self, now: Instant) -> &[Alert] {
        self.alerts.retain(|a| !a.is_expired(now));
        &self.alerts
    }
}

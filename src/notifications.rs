use std::{
    collections::VecDeque,
    fmt::Display,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};

use crate::AgrobotError;

/// Maximum number of notifications visible at the same time.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Physical feedback requested alongside a notification, strongest last.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feedback {
    Tap,
    Confirm,
    Emergency,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    /// How long the message should stay visible
    pub duration_ms: u64,
    pub feedback: Option<Feedback>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            severity,
            message: message.into(),
            duration_ms,
            feedback: None,
        }
    }

    pub fn info(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(Severity::Info, message, duration_ms)
    }

    pub fn success(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(Severity::Success, message, duration_ms)
    }

    pub fn warning(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(Severity::Warning, message, duration_ms)
    }

    pub fn error(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(Severity::Error, message, duration_ms)
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl From<&AgrobotError> for Notification {
    fn from(value: &AgrobotError) -> Self {
        let severity = value.severity();
        match value {
            AgrobotError::PathValidation { .. } => Notification::new(
                severity,
                "Please draw a complete field boundary first",
                3000,
            ),
            AgrobotError::AlreadyWorking => {
                Notification::new(severity, "Robot is already working!", 2000)
            }
            AgrobotError::AlreadyIdle => {
                Notification::new(severity, "Robot is already stopped", 2000)
            }
            other => Notification::new(severity, other.to_string(), 5000),
        }
    }
}

struct ActiveNotification {
    notification: Notification,
    expires_at: Instant,
}

/// Bounded set of visible notifications. Pushing past capacity evicts the
/// oldest entry and each entry is dismissed once its duration has elapsed.
pub struct NotificationQueue {
    capacity: usize,
    active: VecDeque<ActiveNotification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_VISIBLE_NOTIFICATIONS)
    }
}

impl NotificationQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            active: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration();
        self.active.push_back(ActiveNotification {
            notification,
            expires_at,
        });
        while self.active.len() > self.capacity {
            self.active.pop_front();
        }
    }

    /// Drops every notification whose display time has run out.
    pub fn expire(&mut self, now: Instant) {
        self.active.retain(|active| active.expires_at > now);
    }

    /// Time until the next notification expires, used to schedule a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|active| active.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|active| &active.notification)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

//! Transient user-facing notifications.
//!
//! Only one notification is visible at a time. A new one replaces whatever is
//! showing, and each notification dismisses itself after the display
//! duration unless it has already been replaced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

pub struct Notifier {
    tx: Arc<watch::Sender<Option<Notification>>>,
    next_id: AtomicU64,
    display: Duration,
}

impl Notifier {
    #[must_use]
    pub fn new(display: Duration) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            next_id: AtomicU64::new(0),
            display,
        }
    }

    /// Shows `message`, replacing any visible notification.
    ///
    /// Must be called from within a tokio runtime; the dismissal timer runs
    /// as a spawned task.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;

        match severity {
            Severity::Error => error!(id, "{}", message),
            Severity::Warning => warn!(id, "{}", message),
            Severity::Success | Severity::Info => info!(id, severity = %severity, "{}", message),
        }

        self.tx.send_replace(Some(Notification {
            id,
            message,
            severity,
        }));

        let tx = Arc::clone(&self.tx);
        let display = self.display;
        tokio::spawn(async move {
            tokio::time::sleep(display).await;
            tx.send_if_modified(|current| match current {
                Some(n) if n.id == id => {
                    *current = None;
                    true
                }
                _ => false,
            });
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Info)
    }

    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.tx.subscribe()
    }

    #[must_use]
    pub const fn display_duration(&self) -> Duration {
        self.display
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(crate::constants::intervals::NOTIFICATION_DISPLAY)
    }
}

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::clients::backend::MovieBackend;

/// Backend reachability as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    Checking,
    Online,
    Offline,
}

impl Reachability {
    #[must_use]
    pub const fn from_probe(reachable: bool) -> Self {
        if reachable { Self::Online } else { Self::Offline }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct StatusReflector {
    tx: watch::Sender<Reachability>,
}

impl Default for StatusReflector {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReflector {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Reachability::Checking);
        Self { tx }
    }

    #[must_use]
    pub fn current(&self) -> Reachability {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Reachability> {
        self.tx.subscribe()
    }

    /// Replaces the state with the outcome of a probe.
    pub fn record(&self, reachable: bool) -> Reachability {
        let next = Reachability::from_probe(reachable);
        let previous = self.tx.send_replace(next);

        if previous == next {
            debug!(state = %next, "Backend status unchanged");
        } else if next == Reachability::Online {
            info!(from = %previous, "Backend is online");
        } else {
            warn!(from = %previous, "Backend is offline");
        }

        next
    }

    pub async fn check(&self, backend: &dyn MovieBackend) -> Reachability {
        let reachable = backend.probe().await;
        self.record(reachable)
    }

    /// Probes immediately, then once per `every` until the task is aborted.
    pub fn spawn(
        self: Arc<Self>,
        backend: Arc<dyn MovieBackend>,
        every: Duration,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                self.check(backend.as_ref()).await;
            }
        })
    }
}

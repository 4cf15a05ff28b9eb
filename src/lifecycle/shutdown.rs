//! Shutdown coordination for the responder.

use std::time::Duration;

use tokio::sync::watch;

/// How long in-flight requests may keep running after shutdown starts.
///
/// A `/sleep/{time}` request can ask for any delay, so draining is bounded.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinator for graceful shutdown.
///
/// Level-triggered: a receiver taken after [`trigger`](Self::trigger) still
/// observes the shutdown.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once shutdown has been triggered.
pub async fn signalled(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stopping| *stopping).await;
}

/// Resolves `timeout` after shutdown has been triggered.
pub async fn drain_deadline(rx: watch::Receiver<bool>, timeout: Duration) {
    signalled(rx).await;
    tokio::time::sleep(timeout).await;
}

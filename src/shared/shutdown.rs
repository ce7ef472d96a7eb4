//! Graceful shutdown handling
//!
//! A cloneable [`ShutdownSignal`] is handed to the API server; the
//! [`ShutdownCoordinator`] owns it and bounds how long draining may take.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{info, warn};

/// Shutdown signal that can be cloned and shared across tasks
#[derive(Clone)]
pub struct ShutdownSignal {
    sender: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            sender,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::SeqCst) {
            info!("Shutdown signal triggered");
            let _ = self.sender.send(());
        }
    }

    /// Resolves once [`trigger`](Self::trigger) has been called, including
    /// when it was called before this future was created.
    pub async fn wait(&self) {
        let mut rx = self.sender.subscribe();
        if self.is_triggered() {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Listen for OS shutdown signals (SIGTERM, SIGINT)
pub async fn listen_for_shutdown_signals(shutdown: ShutdownSignal) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    warn!("Failed to install signal handlers: {}", e);
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM"),
            _ = sigint.recv() => info!("Received SIGINT (Ctrl+C)"),
        }

        shutdown.trigger();
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            return;
        }
        info!("Received Ctrl+C");
        shutdown.trigger();
    }
}

/// Graceful shutdown coordinator
pub struct ShutdownCoordinator {
    signal: ShutdownSignal,
    timeout_secs: u64,
}

impl ShutdownCoordinator {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            signal: ShutdownSignal::new(),
            timeout_secs,
        }
    }

    pub fn signal(&self) -> ShutdownSignal {
        self.signal.clone()
    }

    pub fn start_signal_listener(&self) {
        let signal = self.signal.clone();
        tokio::spawn(async move {
            listen_for_shutdown_signals(signal).await;
        });
    }

    /// Waits for the signal, then runs `cleanup` bounded by the configured
    /// timeout. Returns `false` if the timeout elapsed first.
    pub async fn shutdown_with_cleanup<F, Fut>(&self, cleanup: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.signal.wait().await;
        info!(
            "Starting graceful shutdown (timeout: {}s)...",
            self.timeout_secs
        );

        match tokio::time::timeout(Duration::from_secs(self.timeout_secs), cleanup()).await {
            Ok(()) => {
                info!("Graceful shutdown completed");
                true
            }
            Err(_) => {
                warn!("Graceful shutdown timed out after {}s", self.timeout_secs);
                false
            }
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new(30)
    }
}

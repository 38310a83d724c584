//! Utility functions for rate limiter

use super::limiter::RateLimiter;
use super::types::ClientWindow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;

impl RateLimiter {
    /// Drop every window that has expired at `now`, returning how many were removed
    ///
    /// An expired window would be replaced on the client's next request anyway,
    /// so sweeping never changes an admission outcome.
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock();
        let before = windows.len();
        windows.retain(|_, window| !window.is_expired(now));
        before - windows.len()
    }

    /// Start background sweep task
    pub fn start_sweep_task(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = self.sweep_expired(Instant::now());
                if removed > 0 {
                    debug!(
                        removed,
                        remaining = self.tracked_clients(),
                        "Swept expired rate limit windows"
                    );
                }
            }
        })
    }

    /// Number of clients with a tracked window
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }

    /// Snapshot of a client's current window
    pub fn window(&self, client_id: &str) -> Option<ClientWindow> {
        self.windows.lock().get(client_id).copied()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.config.max_requests
    }

    /// Get the configured window length
    pub fn window_duration(&self) -> Duration {
        self.window
    }
}

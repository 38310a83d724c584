//! Core rate limiter implementation

use super::types::{ClientWindow, RateLimitDecision};
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Per-client fixed window rate limiter
///
/// Owns its window map; construct one per server (or per test). The lock is
/// held only for the check-and-update of a single window, never across I/O.
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Window length, kept at full precision
    pub(super) window: Duration,
    /// Windows by client identifier (usually the peer IP)
    pub(super) windows: Mutex<HashMap<String, ClientWindow>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        let window = config.window();
        Self::with_window(config, window)
    }

    /// Create an enabled rate limiter with an explicit policy
    ///
    /// `window` is used as given, sub-second part included.
    pub fn with_policy(max_requests: u32, window: Duration) -> Self {
        let config = RateLimitConfig {
            enabled: true,
            max_requests,
            window_secs: window.as_secs(),
            ..RateLimitConfig::default()
        };
        Self::with_window(config, window)
    }

    fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        Self {
            config,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject a request from `client_id` arriving now
    pub fn admit(&self, client_id: &str) -> RateLimitDecision {
        self.admit_at(client_id, Instant::now())
    }

    /// Admit or reject a request from `client_id` arriving at `now`
    ///
    /// Check, increment and reset happen under one lock acquisition.
    pub fn admit_at(&self, client_id: &str, now: Instant) -> RateLimitDecision {
        let limit = self.config.max_requests;
        if !self.config.enabled {
            return RateLimitDecision::allow(0, limit);
        }

        let window = self.window;
        let mut windows = self.windows.lock();

        let Some(entry) = windows.get_mut(client_id) else {
            windows.insert(client_id.to_string(), ClientWindow::fresh(now, window));
            return RateLimitDecision::allow(1, limit);
        };

        if entry.is_expired(now) {
            *entry = ClientWindow::fresh(now, window);
            return RateLimitDecision::allow(1, limit);
        }

        if entry.count < limit {
            entry.count += 1;
            return RateLimitDecision::allow(entry.count, limit);
        }

        let retry_after = entry.reset_at.saturating_duration_since(now);
        debug!(
            client = client_id,
            count = entry.count,
            limit,
            "Rate limit exceeded, retry after {:?}",
            retry_after
        );
        RateLimitDecision::reject(entry.count, limit, retry_after)
    }
}

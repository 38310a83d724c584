//! Rate limiter types and data structures

use std::time::{Duration, Instant};

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Requests counted in the client's current window (after this one, if allowed)
    pub count: u32,
    /// Maximum requests allowed per window
    pub limit: u32,
    /// Requests left in the window
    pub remaining: u32,
    /// Time until the window resets; zero when allowed
    pub retry_after: Duration,
}

impl RateLimitDecision {
    pub(super) fn allow(count: u32, limit: u32) -> Self {
        Self {
            allowed: true,
            count,
            limit,
            remaining: limit.saturating_sub(count),
            retry_after: Duration::ZERO,
        }
    }

    pub(super) fn reject(count: u32, limit: u32, retry_after: Duration) -> Self {
        Self {
            allowed: false,
            count,
            limit,
            remaining: 0,
            retry_after,
        }
    }
}

/// Fixed window tracked for one client
///
/// `count` only grows while `now < reset_at`; at or past `reset_at` the
/// window is replaced by a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientWindow {
    /// Requests observed in the current window
    pub count: u32,
    /// Instant at which the window expires
    pub reset_at: Instant,
}

impl ClientWindow {
    pub(super) fn fresh(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            reset_at: now + window,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.reset_at
    }
}

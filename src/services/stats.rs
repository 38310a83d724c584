//! Process-local gateway counters

use crate::utils::format_duration;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Live counters behind `GET /api/v1/stats`
#[derive(Debug)]
pub struct GatewayStats {
    started_at: Instant,
    total_chats: AtomicU64,
    total_chat_millis: AtomicU64,
}

/// Serialized shape of the stats endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_chats: u64,
    pub active_users: usize,
    pub avg_response_time: String,
    pub uptime_hours: u64,
    pub timestamp: u64,
}

impl Default for GatewayStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            total_chats: AtomicU64::new(0),
            total_chat_millis: AtomicU64::new(0),
        }
    }

    /// Count one successful chat that took `elapsed`
    pub fn record_chat(&self, elapsed: Duration) {
        self.total_chats.fetch_add(1, Ordering::Relaxed);
        self.total_chat_millis
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn total_chats(&self) -> u64 {
        self.total_chats.load(Ordering::Relaxed)
    }

    pub fn average_chat_millis(&self) -> u64 {
        let chats = self.total_chats();
        if chats == 0 {
            return 0;
        }
        self.total_chat_millis.load(Ordering::Relaxed) / chats
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// `active_users` comes from the caller (tracked rate limit windows)
    pub fn snapshot(&self, active_users: usize) -> StatsSnapshot {
        StatsSnapshot {
            total_chats: self.total_chats(),
            active_users,
            avg_response_time: format_duration(self.average_chat_millis()),
            uptime_hours: self.uptime().as_secs() / 3600,
            timestamp: crate::utils::current_timestamp(),
        }
    }
}

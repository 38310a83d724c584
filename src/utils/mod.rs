//! Utility modules for the gateway
//!
//! - **error**: Error taxonomy and HTTP mapping

pub mod error;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_MESSAGE_NANOS: AtomicU64 = AtomicU64::new(0);

/// Generate a unique message ID (`msg_<nanoseconds>`)
///
/// Derived from the wall clock, but strictly increasing within the process:
/// two calls in the same nanosecond (or across a clock step back) still get
/// distinct ids.
pub fn generate_message_id() -> String {
    let now = current_timestamp_nanos();
    let previous = LAST_MESSAGE_NANOS
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    format!("msg_{}", now.max(previous + 1))
}

/// Get current timestamp in seconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Get current timestamp in nanoseconds
pub fn current_timestamp_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Format duration as human readable string
pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else if duration_ms < 3_600_000 {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    } else {
        format!("{:.1}h", duration_ms as f64 / 3_600_000.0)
    }
}

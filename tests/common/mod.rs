//! Common test utilities for xionco-gateway

pub mod fixtures;

pub use fixtures::{MockAiService, upstream_config};

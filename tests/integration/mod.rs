//! Integration tests for xionco-gateway
//!
//! These tests exercise the public API with a mock AI service standing in
//! for the real backend.

pub mod chat_forwarder_tests;
pub mod config_tests;
pub mod error_handling_tests;
pub mod rate_limiter_tests;

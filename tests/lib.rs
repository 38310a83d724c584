//! Test suite for xionco-gateway
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared fixtures and a mock AI service built on wiremock.
//!
//! ### 2. Integration Tests (`integration/`)
//! Tests that drive the public API across components:
//! - Rate limiter in front of the chat forwarder
//! - Configuration loading from YAML files and environment overrides
//! - Error to HTTP response mapping
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run only the integration suite
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;

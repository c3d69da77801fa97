//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test `.env` discovery, precedence and failure handling.
//! - Test prefix-fallback resolution against the process environment.
//! - Test typed configuration building and validation.
//!
//! Invariants:
//! - Tests touching process-global state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

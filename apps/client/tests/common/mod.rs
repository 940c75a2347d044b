#![allow(dead_code)]

// tests/common/mod.rs
use std::time::Duration;

/// Upper bound for any single wait on the stub servers.
pub const WAIT: Duration = Duration::from_secs(5);

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

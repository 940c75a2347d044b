//! Client test support utilities
//!
//! Shared by the client's integration tests: unified logging initialization
//! and JSON fixtures shaped like the table server's payloads.

pub mod fixtures;
pub mod logging;

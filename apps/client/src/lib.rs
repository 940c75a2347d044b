#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod transport;


// Re-exports for public API
pub use app::start;
pub use config::{ClientConfig, LogFormat, Transport};
pub use error::ClientError;
pub use protocol::{BootstrapResponse, InboundEvent, OutboundEvent, ServerError};
pub use render::{Painter, TerminalPainter};
pub use session::{ClickTarget, Frame, Notice, SessionContext};
pub use transport::{Connection, Connector, Handshake, SocketIoConnector, WsConnector};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! Network edges: the one-shot bootstrap fetch and the event socket.

pub mod http;
pub mod socketio;
pub mod ws;

use async_trait::async_trait;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::error::ClientError;
use crate::protocol::events::{InboundEvent, OutboundEvent};

pub use http::{fetch_bootstrap, BootstrapClient};
pub use socketio::SocketIoConnector;
pub use ws::WsConnector;

/// Where to open the socket, and the session cookie the server uses to
/// recognise the player from the bootstrap request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub url: String,
    pub cookie: Option<String>,
}

impl Handshake {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cookie: None,
        }
    }
}

/// An open event socket, as a pair of channels.
///
/// Sends are fire-and-forget. The inbound channel ends with `Disconnect`
/// or simply closes when the server goes away.
pub struct Connection {
    pub outbound: UnboundedSender<OutboundEvent>,
    pub inbound: UnboundedReceiver<InboundEvent>,
}

#[async_trait]
pub trait Connector: Send + Sync {
    /// Open the socket. The first inbound event is always `Connect`.
    async fn connect(&self, handshake: &Handshake) -> Result<Connection, ClientError>;
}

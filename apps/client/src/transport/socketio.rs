use async_trait::async_trait;
use futures_util::FutureExt;
use rust_socketio::asynchronous::{Client, ClientBuilder};
use rust_socketio::{Event, Payload};
use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ClientError;
use crate::protocol::events::{InboundEvent, OutboundEvent};
use crate::transport::{Connection, Connector, Handshake};

/// Socket.IO connector, the table server's native transport.
///
/// Takes the server's base `http(s)://` URL; the Engine.IO path is added by
/// the client library. The session cookie rides on the opening request.
#[derive(Debug, Default, Clone, Copy)]
pub struct SocketIoConnector;

#[async_trait]
impl Connector for SocketIoConnector {
    async fn connect(&self, handshake: &Handshake) -> Result<Connection, ClientError> {
        let conn_id = Uuid::new_v4();
        let url = handshake.url.clone();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<OutboundEvent>();
        let (in_tx, in_rx) = mpsc::unbounded_channel::<InboundEvent>();

        // Queued ahead of anything the server sends once the handshake lands.
        let _ = in_tx.send(InboundEvent::Connect);

        let events_tx = in_tx.clone();
        let close_tx = in_tx;
        let mut builder = ClientBuilder::new(url.clone())
            .reconnect(false)
            .on_any(move |event: Event, payload: Payload, _client: Client| {
                forward(&events_tx, conn_id, event, payload);
                async {}.boxed()
            })
            .on("close", move |_payload: Payload, _client: Client| {
                let _ = close_tx.send(InboundEvent::Disconnect);
                async {}.boxed()
            })
            .on("error", move |payload: Payload, _client: Client| {
                warn!(%conn_id, ?payload, "[SOCKETIO] transport error");
                async {}.boxed()
            });
        if let Some(cookie) = &handshake.cookie {
            builder = builder.opening_header("Cookie", cookie.clone());
        }

        let client = builder
            .connect()
            .await
            .map_err(|e| ClientError::connect(format!("{url}: {e}")))?;
        info!(%conn_id, url = %url, "[SOCKETIO] connected");

        tokio::spawn(async move {
            while let Some(event) = out_rx.recv().await {
                let (name, data) = match event.to_parts() {
                    Ok(parts) => parts,
                    Err(err) => {
                        warn!(%conn_id, error = %err, "[SOCKETIO] dropping unencodable event");
                        continue;
                    }
                };
                debug!(%conn_id, event = name, "[SOCKETIO] send");
                if let Err(err) = client.emit(name, data).await {
                    warn!(%conn_id, error = %err, "[SOCKETIO] send failed; writer stopping");
                    break;
                }
            }
            let _ = client.disconnect().await;
            debug!(%conn_id, "[SOCKETIO] writer finished");
        });

        Ok(Connection {
            outbound: out_tx,
            inbound: in_rx,
        })
    }
}

fn forward(tx: &UnboundedSender<InboundEvent>, conn_id: Uuid, event: Event, payload: Payload) {
    match decode(event, payload) {
        Ok(Some(event)) => {
            debug!(%conn_id, event = event.name(), "[SOCKETIO] recv");
            let _ = tx.send(event);
        }
        Ok(None) => {}
        Err(err) => warn!(%conn_id, error = %err, "[SOCKETIO] dropping malformed event"),
    }
}

/// Decode one server event. Only named events carry table traffic; the
/// first JSON argument is the payload.
fn decode(event: Event, payload: Payload) -> Result<Option<InboundEvent>, ClientError> {
    let Event::Custom(name) = event else {
        return Ok(None);
    };
    let data = match payload {
        Payload::Text(values) => values.into_iter().next().unwrap_or(Value::Null),
        _ => return Err(ClientError::protocol(format!("{name}: expected a JSON payload"))),
    };
    InboundEvent::from_parts(&name, data)
}

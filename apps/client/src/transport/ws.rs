use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::{header, HeaderValue};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ClientError;
use crate::protocol::events::{InboundEvent, OutboundEvent};
use crate::transport::{Connection, Connector, Handshake};

/// WebSocket connector speaking JSON text frames. `ws://` and `wss://`
/// URLs are both accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, handshake: &Handshake) -> Result<Connection, ClientError> {
        let conn_id = Uuid::new_v4();
        let url = handshake.url.as_str();
        let mut request = url
            .into_client_request()
            .map_err(|e| ClientError::connect(format!("{url}: {e}")))?;
        if let Some(cookie) = &handshake.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::connect(format!("invalid session cookie: {e}")))?;
            request.headers_mut().insert(header::COOKIE, value);
        }

        let (stream, _) = connect_async(request)
            .await
            .map_err(|e| ClientError::connect(format!("{url}: {e}")))?;
        info!(%conn_id, url, "[WS] connected");

        let (mut sink, mut source) = stream.split();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<OutboundEvent>();
        let (in_tx, in_rx) = mpsc::unbounded_channel::<InboundEvent>();

        // Receiver is still held here, so this cannot fail.
        let _ = in_tx.send(InboundEvent::Connect);

        tokio::spawn(async move {
            while let Some(event) = out_rx.recv().await {
                let frame = match event.to_frame() {
                    Ok(frame) => frame,
                    Err(err) => {
                        warn!(%conn_id, error = %err, "[WS] dropping unencodable event");
                        continue;
                    }
                };
                debug!(%conn_id, event = event.name(), "[WS] send");
                if let Err(err) = sink.send(Message::Text(frame.into())).await {
                    warn!(%conn_id, error = %err, "[WS] send failed; writer stopping");
                    break;
                }
            }
            let _ = sink.close().await;
            debug!(%conn_id, "[WS] writer finished");
        });

        tokio::spawn(async move {
            while let Some(message) = source.next().await {
                match message {
                    Ok(Message::Text(text)) => match InboundEvent::from_frame(text.as_str()) {
                        Ok(Some(event)) => {
                            debug!(%conn_id, event = event.name(), "[WS] recv");
                            if in_tx.send(event).is_err() {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(err) => {
                            warn!(%conn_id, error = %err, "[WS] dropping malformed frame");
                        }
                    },
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(err) => {
                        warn!(%conn_id, error = %err, "[WS] read failed");
                        break;
                    }
                }
            }
            let _ = in_tx.send(InboundEvent::Disconnect);
            info!(%conn_id, "[WS] connection closed");
        });

        Ok(Connection {
            outbound: out_tx,
            inbound: in_rx,
        })
    }
}

//! Named socket events exchanged with the table server.
//!
//! Each event is a name plus one JSON payload. Socket.IO carries the pair
//! natively; over a plain WebSocket every frame is a JSON text message of
//! the form `{"event": "<name>", "data": <payload>}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{CardId, PlayerId, Snapshot, Zone};
use crate::error::ClientError;

/// Events the client sends. Each is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum OutboundEvent {
    JoinGame {
        game_id: String,
        player_id: PlayerId,
    },
    PlayCard {
        card_id: CardId,
    },
    InkCard {
        card_id: CardId,
    },
    MoveCard {
        card_id: CardId,
        to_zone: Zone,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        face_up: Option<bool>,
    },
    ExertCard {
        card_id: CardId,
    },
    ReadyCard {
        card_id: CardId,
    },
    AddDamage {
        card_id: CardId,
    },
    RemoveDamage {
        card_id: CardId,
    },
    DrawCard {},
    ShuffleDeck {},
    EndTurn {},
    FlipMysteryCard {},
    AddLore {
        amount: u32,
    },
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::JoinGame { .. } => "join_game",
            OutboundEvent::PlayCard { .. } => "play_card",
            OutboundEvent::InkCard { .. } => "ink_card",
            OutboundEvent::MoveCard { .. } => "move_card",
            OutboundEvent::ExertCard { .. } => "exert_card",
            OutboundEvent::ReadyCard { .. } => "ready_card",
            OutboundEvent::AddDamage { .. } => "add_damage",
            OutboundEvent::RemoveDamage { .. } => "remove_damage",
            OutboundEvent::DrawCard {} => "draw_card",
            OutboundEvent::ShuffleDeck {} => "shuffle_deck",
            OutboundEvent::EndTurn {} => "end_turn",
            OutboundEvent::FlipMysteryCard {} => "flip_mystery_card",
            OutboundEvent::AddLore { .. } => "add_lore",
        }
    }

    pub fn to_frame(&self) -> Result<String, ClientError> {
        serde_json::to_string(self)
            .map_err(|e| ClientError::protocol(format!("failed to encode {}: {e}", self.name())))
    }

    /// Event name and payload, for transports that frame events themselves.
    pub fn to_parts(&self) -> Result<(&'static str, Value), ClientError> {
        let mut value = serde_json::to_value(self)
            .map_err(|e| ClientError::protocol(format!("failed to encode {}: {e}", self.name())))?;
        let data = value
            .get_mut("data")
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(Map::new()));
        Ok((self.name(), data))
    }
}

/// Payload of a server `error` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
}

/// Events the client reacts to.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// Socket handshake completed. Produced by the transport, not the server.
    Connect,
    /// Socket closed. Produced by the transport.
    Disconnect,
    GameJoined { game_id: Option<String> },
    GameUpdate(Snapshot),
    Error(ServerError),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GameJoinedPayload {
    #[serde(default)]
    game_id: Option<String>,
}

impl InboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InboundEvent::Connect => "connect",
            InboundEvent::Disconnect => "disconnect",
            InboundEvent::GameJoined { .. } => "game_joined",
            InboundEvent::GameUpdate(_) => "game_update",
            InboundEvent::Error(_) => "error",
        }
    }

    /// Decode one text frame.
    pub fn from_frame(text: &str) -> Result<Option<Self>, ClientError> {
        let envelope: Envelope = serde_json::from_str(text)
            .map_err(|e| ClientError::protocol(format!("malformed frame: {e}")))?;
        Self::from_parts(&envelope.event, envelope.data)
    }

    /// Decode a named event and its payload.
    ///
    /// Returns `Ok(None)` for events this client does not know about so the
    /// caller can skip them without tearing the session down.
    pub fn from_parts(event: &str, data: Value) -> Result<Option<Self>, ClientError> {
        let event = match event {
            "connect" => InboundEvent::Connect,
            "game_joined" => {
                let payload = if data.is_null() {
                    GameJoinedPayload::default()
                } else {
                    serde_json::from_value(data).map_err(|e| {
                        ClientError::protocol(format!("bad game_joined payload: {e}"))
                    })?
                };
                InboundEvent::GameJoined {
                    game_id: payload.game_id,
                }
            }
            "game_update" => {
                let snapshot = serde_json::from_value(data).map_err(|e| {
                    ClientError::protocol(format!("bad game_update payload: {e}"))
                })?;
                InboundEvent::GameUpdate(snapshot)
            }
            "error" => {
                let err = serde_json::from_value(data)
                    .map_err(|e| ClientError::protocol(format!("bad error payload: {e}")))?;
                InboundEvent::Error(err)
            }
            other => {
                warn!(event = other, "[PROTOCOL] ignoring unknown inbound event");
                return Ok(None);
            }
        };
        Ok(Some(event))
    }
}

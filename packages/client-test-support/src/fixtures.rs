//! Server-shaped JSON payloads.

use serde_json::{json, Map, Value};

pub const GAME_ID: &str = "test-game";
pub const VIEWER: &str = "player1";
pub const OPPONENT: &str = "player2";
pub const OPPONENT_DECK: u32 = 40;

/// One card in the server's `CardView` shape.
pub fn card_json(id: &str, owner: &str, zone: &str) -> Value {
    json!({
        "id": id,
        "zone": zone,
        "exerted": false,
        "damage": 0,
        "image_url": format!("/static/cards/{id}.png"),
        "owner": owner,
        "face_up": true,
        "position": 0,
        "card_data": { "name": format!("Card {id}"), "cost": 2, "inkable": true }
    })
}

/// Two-player table, viewer to act, with the given own hand and ready row.
pub fn snapshot_json(turn: u32, hand: &[&str], ready: &[&str]) -> Value {
    let mut my_cards = Map::new();
    for id in hand {
        my_cards.insert(id.to_string(), card_json(id, VIEWER, "hand"));
    }
    for id in ready {
        my_cards.insert(id.to_string(), card_json(id, VIEWER, "ready"));
    }

    json!({
        "game_id": GAME_ID,
        "turn_number": turn,
        "current_turn": VIEWER,
        "player_order": [VIEWER, OPPONENT],
        "players": {
            VIEWER: {
                "id": VIEWER,
                "username": "You",
                "lore": 0,
                "has_inked_this_turn": false,
                "zone_counts": {
                    "deck": 0, "hand": hand.len(), "ready": ready.len(),
                    "summoning": 0, "discard": 0, "ink": 0, "mystery": 1
                },
                "zones": {
                    "deck": [], "hand": hand, "ready": ready,
                    "summoning": [], "discard": [], "ink": [], "mystery": []
                }
            },
            OPPONENT: {
                "id": OPPONENT,
                "username": "Player 2",
                "lore": 0,
                "has_inked_this_turn": false,
                "zone_counts": {
                    "deck": OPPONENT_DECK, "hand": 7, "ready": 0,
                    "summoning": 0, "discard": 0, "ink": 0, "mystery": 1
                },
                "zones": {}
            }
        },
        "my_cards": my_cards,
        "visible_cards": {}
    })
}

pub fn bootstrap_json(state: Value) -> Value {
    json!({ "game_id": GAME_ID, "player_id": VIEWER, "state": state })
}

/// Encode one socket frame.
pub fn frame(event: &str, data: Value) -> String {
    json!({ "event": event, "data": data }).to_string()
}

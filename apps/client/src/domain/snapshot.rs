//! Game-state snapshot as pushed by the table server.
//!
//! The client keeps exactly one of these at a time and swaps it out whole on
//! every `game_update`. Nothing here is ever mutated in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::zones::Zone;

pub type PlayerId = String;
pub type CardId = String;

/// Lore needed to win; shown next to the counter.
pub const LORE_TARGET: u32 = 20;

/// Full game state from one viewer's perspective.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub game_id: Option<String>,
    pub turn_number: u32,
    #[serde(default)]
    pub current_turn: Option<PlayerId>,
    /// Seat order; opponents are laid out following the viewer's seat.
    #[serde(default)]
    pub player_order: Vec<PlayerId>,
    pub players: BTreeMap<PlayerId, PlayerView>,
    #[serde(default)]
    pub my_cards: BTreeMap<CardId, CardView>,
    #[serde(default)]
    pub visible_cards: BTreeMap<CardId, CardView>,
}

impl Snapshot {
    pub fn player(&self, id: &str) -> Option<&PlayerView> {
        self.players.get(id)
    }

    pub fn my_card(&self, id: &str) -> Option<&CardView> {
        self.my_cards.get(id)
    }

    pub fn current_player(&self) -> Option<&PlayerView> {
        self.current_turn.as_deref().and_then(|id| self.players.get(id))
    }

    /// Players other than `viewer`, rotated so the seat after the viewer
    /// comes first. Players missing from `player_order` trail in map order.
    pub fn opponents_in_seat_order(&self, viewer: &str) -> Vec<(&str, &PlayerView)> {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.players.len());
        if let Some(pos) = self.player_order.iter().position(|p| p == viewer) {
            let (before, after) = self.player_order.split_at(pos);
            ordered.extend(after.iter().skip(1).map(String::as_str));
            ordered.extend(before.iter().map(String::as_str));
        } else {
            ordered.extend(self.player_order.iter().map(String::as_str));
        }
        for id in self.players.keys() {
            if !ordered.contains(&id.as_str()) {
                ordered.push(id.as_str());
            }
        }

        ordered
            .into_iter()
            .filter(|id| *id != viewer)
            .filter_map(|id| self.players.get(id).map(|player| (id, player)))
            .collect()
    }
}

/// Public per-player state plus, for the viewer only, zone contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    #[serde(default)]
    pub id: PlayerId,
    pub username: String,
    #[serde(default)]
    pub lore: u32,
    #[serde(default)]
    pub has_inked_this_turn: bool,
    #[serde(default)]
    pub zone_counts: ZoneCounts,
    /// Ordered card ids per zone. Empty for everyone but the viewer.
    #[serde(default)]
    pub zones: PlayerZones,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneCounts {
    pub deck: u32,
    pub hand: u32,
    pub ready: u32,
    pub summoning: u32,
    pub discard: u32,
    pub ink: u32,
    pub mystery: u32,
}

impl ZoneCounts {
    pub fn get(&self, zone: Zone) -> u32 {
        match zone {
            Zone::Deck => self.deck,
            Zone::Hand => self.hand,
            Zone::Ready => self.ready,
            Zone::Summoning => self.summoning,
            Zone::Discard => self.discard,
            Zone::Ink => self.ink,
            Zone::Mystery => self.mystery,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerZones {
    pub deck: Vec<CardId>,
    pub hand: Vec<CardId>,
    pub ready: Vec<CardId>,
    pub summoning: Vec<CardId>,
    pub discard: Vec<CardId>,
    pub ink: Vec<CardId>,
    pub mystery: Vec<CardId>,
}

impl PlayerZones {
    pub fn get(&self, zone: Zone) -> &[CardId] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Ready => &self.ready,
            Zone::Summoning => &self.summoning,
            Zone::Discard => &self.discard,
            Zone::Ink => &self.ink,
            Zone::Mystery => &self.mystery,
        }
    }
}

/// A single card instance as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub zone: Zone,
    #[serde(default)]
    pub exerted: bool,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owner: Option<PlayerId>,
    #[serde(default)]
    pub face_up: bool,
    #[serde(default)]
    pub position: u32,
    /// Printed card details; absent while the face is hidden.
    #[serde(default)]
    pub card_data: Option<CardData>,
}

impl CardView {
    pub fn is_owned_by(&self, player: &str) -> bool {
        self.owner.as_deref().map_or(true, |owner| owner == player)
    }

    /// Best human-readable name for the card, if its face is known.
    pub fn display_name(&self) -> Option<String> {
        let data = self.card_data.as_ref()?;
        if let Some(full) = data.full_name.as_deref().filter(|s| !s.is_empty()) {
            return Some(full.to_string());
        }
        let name = data.name.as_deref().filter(|s| !s.is_empty())?;
        match data.subtitle.as_deref().filter(|s| !s.is_empty()) {
            Some(subtitle) => Some(format!("{name} - {subtitle}")),
            None => Some(name.to_string()),
        }
    }
}

/// Subset of printed card metadata the client displays. Unknown fields are
/// ignored so catalog changes on the server never break decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub full_name: Option<String>,
}

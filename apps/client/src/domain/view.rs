//! Snapshot → view-tree projection.
//!
//! `project` is a pure function: the same snapshot and viewer always yield the
//! same tree. Painters rebuild their output from the tree on every update.
//! Inconsistent snapshots (dangling card ids, unknown players) are logged and
//! the offending item is left out; projection never fails.

use tracing::warn;

use crate::domain::snapshot::{CardView, PlayerView, Snapshot, LORE_TARGET};
use crate::domain::zones::{PileKind, Zone};

/// Glyph painted on a card whose art is unknown.
pub const FACE_DOWN_GLYPH: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub header: TurnHeader,
    pub layout: Layout,
    /// `None` only when the viewer is missing from the snapshot.
    pub own: Option<OwnBoard>,
    pub opponents: Vec<OpponentBoard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnHeader {
    pub turn_number: u32,
    pub current_player: Option<String>,
}

/// Board arrangement, chosen by the number of seated players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Solo,
    HeadsUp,
    Multiplayer,
}

impl Layout {
    pub fn for_player_count(count: usize) -> Self {
        match count {
            0 | 1 => Layout::Solo,
            2 => Layout::HeadsUp,
            _ => Layout::Multiplayer,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Layout::Solo => "players-1",
            Layout::HeadsUp => "players-2",
            Layout::Multiplayer => "players-3plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoreCounter {
    pub value: u32,
    pub target: u32,
}

impl LoreCounter {
    fn new(value: u32) -> Self {
        Self {
            value,
            target: LORE_TARGET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileView {
    pub kind: PileKind,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnBoard {
    pub player_id: String,
    pub username: String,
    pub lore: LoreCounter,
    pub is_current_turn: bool,
    pub has_inked_this_turn: bool,
    /// Deck, mystery, discard and ink, in that order.
    pub piles: Vec<PileView>,
    pub hand: Vec<CardElement>,
    pub ready: Vec<CardElement>,
    pub summoning: Vec<CardElement>,
}

/// A zone drawn only as a stack of face-down placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenPile {
    pub zone: Zone,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentBoard {
    pub player_id: String,
    pub username: String,
    pub lore: LoreCounter,
    pub is_current_turn: bool,
    /// Deck, mystery and hand: counts only.
    pub hidden: Vec<HiddenPile>,
    pub discard_count: u32,
    pub ink_count: u32,
    pub ready: Vec<CardElement>,
    pub summoning: Vec<CardElement>,
    /// Face-up discard and ink entries the server chose to reveal.
    pub discard: Vec<CardElement>,
    pub ink: Vec<CardElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    Art { image_url: String },
    FaceDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub card_id: String,
    pub zone: Zone,
    pub face: CardFace,
    pub name: Option<String>,
    /// Badge value, present only when damage > 0.
    pub damage: Option<u32>,
    pub exerted: bool,
    pub interactive: bool,
}

impl CardElement {
    pub fn from_card(card: &CardView, interactive: bool) -> Self {
        let face = match card.image_url.as_deref() {
            Some(url) if !url.is_empty() => CardFace::Art {
                image_url: url.to_string(),
            },
            _ => CardFace::FaceDown,
        };
        Self {
            card_id: card.id.clone(),
            zone: card.zone,
            face,
            name: card.display_name(),
            damage: (card.damage > 0).then_some(card.damage),
            exerted: card.exerted,
            interactive,
        }
    }
}

/// Build the full view for `viewer` from `snapshot`.
pub fn project(snapshot: &Snapshot, viewer: &str) -> ViewTree {
    let current_player = snapshot.current_player().map(|player| player.username.clone());
    if let (None, Some(id)) = (&current_player, snapshot.current_turn.as_deref()) {
        warn!(player_id = id, "[VIEW] current turn player missing from snapshot");
    }

    let own = match snapshot.player(viewer) {
        Some(player) => Some(own_board(snapshot, player, viewer)),
        None => {
            warn!(player_id = viewer, "[VIEW] viewer missing from snapshot; own board skipped");
            None
        }
    };

    let opponents = snapshot
        .opponents_in_seat_order(viewer)
        .into_iter()
        .map(|(id, player)| opponent_board(snapshot, id, player))
        .collect();

    ViewTree {
        header: TurnHeader {
            turn_number: snapshot.turn_number,
            current_player,
        },
        layout: Layout::for_player_count(snapshot.players.len()),
        own,
        opponents,
    }
}

/// Card elements for one of the viewer's own piles, in pile order.
pub fn own_pile_cards(snapshot: &Snapshot, viewer: &str, pile: PileKind) -> Vec<CardElement> {
    match snapshot.player(viewer) {
        Some(player) => resolve_own_zone(snapshot, player, pile.zone(), false),
        None => {
            warn!(player_id = viewer, "[VIEW] viewer missing from snapshot; pile empty");
            Vec::new()
        }
    }
}

fn own_board(snapshot: &Snapshot, player: &PlayerView, viewer: &str) -> OwnBoard {
    let piles = PileKind::ALL
        .iter()
        .map(|kind| PileView {
            kind: *kind,
            count: player.zone_counts.get(kind.zone()),
        })
        .collect();

    OwnBoard {
        player_id: viewer.to_string(),
        username: player.username.clone(),
        lore: LoreCounter::new(player.lore),
        is_current_turn: snapshot.current_turn.as_deref() == Some(viewer),
        has_inked_this_turn: player.has_inked_this_turn,
        piles,
        hand: resolve_own_zone(snapshot, player, Zone::Hand, true),
        ready: resolve_own_zone(snapshot, player, Zone::Ready, true),
        summoning: resolve_own_zone(snapshot, player, Zone::Summoning, true),
    }
}

fn resolve_own_zone(
    snapshot: &Snapshot,
    player: &PlayerView,
    zone: Zone,
    interactive: bool,
) -> Vec<CardElement> {
    player
        .zones
        .get(zone)
        .iter()
        .filter_map(|id| match snapshot.my_card(id) {
            Some(card) => Some(CardElement::from_card(card, interactive)),
            None => {
                warn!(card_id = %id, zone = %zone, "[VIEW] card missing from my_cards; skipped");
                None
            }
        })
        .collect()
}

fn opponent_board(snapshot: &Snapshot, player_id: &str, player: &PlayerView) -> OpponentBoard {
    let hidden = [Zone::Deck, Zone::Mystery, Zone::Hand]
        .into_iter()
        .map(|zone| HiddenPile {
            zone,
            count: player.zone_counts.get(zone),
        })
        .collect();

    OpponentBoard {
        player_id: player_id.to_string(),
        username: player.username.clone(),
        lore: LoreCounter::new(player.lore),
        is_current_turn: snapshot.current_turn.as_deref() == Some(player_id),
        hidden,
        discard_count: player.zone_counts.discard,
        ink_count: player.zone_counts.ink,
        ready: visible_zone(snapshot, player_id, Zone::Ready),
        summoning: visible_zone(snapshot, player_id, Zone::Summoning),
        discard: visible_zone(snapshot, player_id, Zone::Discard),
        ink: visible_zone(snapshot, player_id, Zone::Ink),
    }
}

fn visible_zone(snapshot: &Snapshot, owner: &str, zone: Zone) -> Vec<CardElement> {
    if zone.is_hidden_from_opponents() {
        return Vec::new();
    }
    let mut cards: Vec<&CardView> = snapshot
        .visible_cards
        .values()
        .filter(|card| card.zone == zone && card.owner.as_deref() == Some(owner))
        .collect();
    cards.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.id.cmp(&b.id)));
    cards
        .into_iter()
        .map(|card| CardElement::from_card(card, false))
        .collect()
}

//! Card zones and their visibility rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named card location on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Deck,
    Hand,
    Ready,
    Summoning,
    Discard,
    Ink,
    Mystery,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Deck,
        Zone::Hand,
        Zone::Ready,
        Zone::Summoning,
        Zone::Discard,
        Zone::Ink,
        Zone::Mystery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Ready => "ready",
            Zone::Summoning => "summoning",
            Zone::Discard => "discard",
            Zone::Ink => "ink",
            Zone::Mystery => "mystery",
        }
    }

    /// Zones whose card identities are never shown for another player.
    pub fn is_hidden_from_opponents(&self) -> bool {
        matches!(self, Zone::Deck | Zone::Mystery | Zone::Hand)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four face-down piles drawn beside a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PileKind {
    Deck,
    Mystery,
    Discard,
    Ink,
}

impl PileKind {
    pub const ALL: [PileKind; 4] = [
        PileKind::Deck,
        PileKind::Mystery,
        PileKind::Discard,
        PileKind::Ink,
    ];

    pub fn zone(&self) -> Zone {
        match self {
            PileKind::Deck => Zone::Deck,
            PileKind::Mystery => Zone::Mystery,
            PileKind::Discard => Zone::Discard,
            PileKind::Ink => Zone::Ink,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "deck" => Some(PileKind::Deck),
            "mystery" => Some(PileKind::Mystery),
            "discard" => Some(PileKind::Discard),
            "ink" => Some(PileKind::Ink),
            _ => None,
        }
    }
}

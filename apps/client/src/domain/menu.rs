//! Card context-menu options.
//!
//! Which options a card offers depends only on its zone, its exerted and
//! damage state, and whether its owner has already inked this turn. The
//! server decides whether any of them is actually legal.

use crate::domain::snapshot::{CardView, PlayerView};
use crate::domain::zones::Zone;
use crate::protocol::events::OutboundEvent;

/// Lore granted by a single quest.
pub const QUEST_LORE: u32 = 1;

/// A user-level action on a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Play,
    Ink,
    Move { to: Zone },
    Exert,
    Ready,
    AddDamage,
    RemoveDamage,
    /// Exert, then ask for lore. Sent as two independent events.
    Quest,
}

impl CardAction {
    /// Outbound events for this action, in send order.
    pub fn messages(&self, card_id: &str) -> Vec<OutboundEvent> {
        let card_id = card_id.to_string();
        match *self {
            CardAction::Play => vec![OutboundEvent::PlayCard { card_id }],
            CardAction::Ink => vec![OutboundEvent::InkCard { card_id }],
            CardAction::Move { to } => vec![OutboundEvent::MoveCard {
                card_id,
                to_zone: to,
                face_up: None,
            }],
            CardAction::Exert => vec![OutboundEvent::ExertCard { card_id }],
            CardAction::Ready => vec![OutboundEvent::ReadyCard { card_id }],
            CardAction::AddDamage => vec![OutboundEvent::AddDamage { card_id }],
            CardAction::RemoveDamage => vec![OutboundEvent::RemoveDamage { card_id }],
            CardAction::Quest => vec![
                OutboundEvent::ExertCard { card_id },
                OutboundEvent::AddLore { amount: QUEST_LORE },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub enabled: bool,
    pub action: CardAction,
}

impl MenuOption {
    fn new(label: &'static str, action: CardAction) -> Self {
        Self {
            label,
            enabled: true,
            action,
        }
    }
}

/// Ordered menu for `card` as seen by `player`.
///
/// Cards owned by someone else never offer anything.
pub fn options_for(card: &CardView, player: &PlayerView) -> Vec<MenuOption> {
    if !player.id.is_empty() && !card.is_owned_by(&player.id) {
        return Vec::new();
    }

    let mut options = Vec::new();
    match card.zone {
        Zone::Hand => {
            options.push(MenuOption::new("Play Card", CardAction::Play));
            if !player.has_inked_this_turn {
                options.push(MenuOption::new("Ink Card", CardAction::Ink));
            }
            options.push(MenuOption::new(
                "Discard",
                CardAction::Move { to: Zone::Discard },
            ));
        }
        Zone::Ready => {
            if card.exerted {
                options.push(MenuOption::new("Ready", CardAction::Ready));
            } else {
                options.push(MenuOption::new("Quest (+1 Lore)", CardAction::Quest));
                // Challenge and Sing are exert aliases; the server sees a plain exert.
                options.push(MenuOption::new("Challenge (Exert)", CardAction::Exert));
                options.push(MenuOption::new("Sing (Exert)", CardAction::Exert));
                options.push(MenuOption::new("Exert", CardAction::Exert));
            }
            push_board_options(&mut options, card);
        }
        Zone::Summoning => {
            options.push(MenuOption::new(
                "Move to Ready",
                CardAction::Move { to: Zone::Ready },
            ));
            push_board_options(&mut options, card);
        }
        Zone::Deck | Zone::Discard | Zone::Ink | Zone::Mystery => {}
    }
    options
}

fn push_board_options(options: &mut Vec<MenuOption>, card: &CardView) {
    options.push(MenuOption::new("Add Damage", CardAction::AddDamage));
    if card.damage > 0 {
        options.push(MenuOption::new("Remove Damage", CardAction::RemoveDamage));
    }
    options.push(MenuOption::new(
        "Move to Hand",
        CardAction::Move { to: Zone::Hand },
    ));
    options.push(MenuOption::new(
        "Move to Discard",
        CardAction::Move { to: Zone::Discard },
    ));
}

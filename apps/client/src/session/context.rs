//! Explicit session state: who we are, the latest snapshot and whatever
//! overlay is open. All user input and inbound events go through here.

use std::collections::BTreeSet;

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::domain::{
    options_for, own_pile_cards, project, CardId, MenuOption, PileKind, PlayerId, Snapshot,
};
use crate::protocol::bootstrap::BootstrapResponse;
use crate::protocol::events::{InboundEvent, OutboundEvent};
use crate::session::overlay::{modal_title, ContextMenu, Frame, PileModal, Point};

/// First turn on which the mystery card may be flipped.
pub const MYSTERY_MIN_TURN: u32 = 3;
pub const MYSTERY_CONFIRM: &str = "Flip and play mystery card?";
pub const MYSTERY_TOO_EARLY: &str = "Mystery card can only be flipped on turn 3 or later";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Draw,
    Shuffle,
    EndTurn,
}

impl Button {
    fn event(&self) -> OutboundEvent {
        match self {
            Button::Draw => OutboundEvent::DrawCard {},
            Button::Shuffle => OutboundEvent::ShuffleDeck {},
            Button::EndTurn => OutboundEvent::EndTurn {},
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Card { card_id: CardId, at: Point },
    /// Zero-based index into the open menu.
    MenuItem(usize),
    Pile(PileKind),
    Button(Button),
    ModalClose,
    Background,
}

/// Something the painter must put in front of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    Confirm(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no card matches '{0}'")]
    NotFound(String),
    #[error("'{prefix}' matches {count} cards")]
    Ambiguous { prefix: String, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingConfirm {
    FlipMystery,
}

pub struct SessionContext {
    game_id: String,
    player_id: PlayerId,
    snapshot: Snapshot,
    emitter: UnboundedSender<OutboundEvent>,
    menu: Option<ContextMenu>,
    modal: Option<PileModal>,
    pending: Option<PendingConfirm>,
}

impl SessionContext {
    pub fn new(
        game_id: String,
        player_id: PlayerId,
        snapshot: Snapshot,
        emitter: UnboundedSender<OutboundEvent>,
    ) -> Self {
        Self {
            game_id,
            player_id,
            snapshot,
            emitter,
            menu: None,
            modal: None,
            pending: None,
        }
    }

    pub fn from_bootstrap(
        bootstrap: BootstrapResponse,
        emitter: UnboundedSender<OutboundEvent>,
    ) -> Self {
        Self::new(
            bootstrap.game_id,
            bootstrap.player_id,
            bootstrap.state,
            emitter,
        )
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn modal(&self) -> Option<&PileModal> {
        self.modal.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn menu_mut(&mut self) -> Option<&mut ContextMenu> {
        self.menu.as_mut()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            view: project(&self.snapshot, &self.player_id),
            menu: self.menu.clone(),
            modal: self.modal.clone(),
            confirm: self.pending.map(|_| MYSTERY_CONFIRM.to_string()),
        }
    }

    pub fn handle_inbound(&mut self, event: InboundEvent) -> Option<Notice> {
        match event {
            InboundEvent::Connect => {
                info!(game_id = %self.game_id, player_id = %self.player_id, "[SESSION] connected; joining game");
                self.emit(OutboundEvent::JoinGame {
                    game_id: self.game_id.clone(),
                    player_id: self.player_id.clone(),
                });
                None
            }
            InboundEvent::Disconnect => {
                info!(game_id = %self.game_id, "[SESSION] socket closed");
                None
            }
            InboundEvent::GameJoined { game_id } => {
                info!(game_id = ?game_id, "[SESSION] joined game");
                None
            }
            InboundEvent::GameUpdate(snapshot) => {
                debug!(turn = snapshot.turn_number, "[SESSION] snapshot replaced");
                self.snapshot = snapshot;
                self.reconcile_overlays();
                None
            }
            InboundEvent::Error(err) => {
                warn!(message = %err.message, "[SESSION] server reported error");
                Some(Notice::Alert(err.message))
            }
        }
    }

    pub fn click(&mut self, target: ClickTarget) -> Option<Notice> {
        if self.pending.is_some() {
            debug!(?target, "[SESSION] click ignored while awaiting confirmation");
            return None;
        }

        if let ClickTarget::MenuItem(index) = target {
            return self.pick_menu_item(index);
        }

        // Every other click dismisses an open menu first.
        self.menu = None;

        match target {
            ClickTarget::Card { card_id, at } => {
                self.open_menu(card_id, at);
                None
            }
            ClickTarget::Pile(pile) => self.click_pile(pile),
            ClickTarget::Button(button) => {
                self.emit(button.event());
                None
            }
            ClickTarget::ModalClose => {
                self.modal = None;
                None
            }
            ClickTarget::Background | ClickTarget::MenuItem(_) => None,
        }
    }

    /// Settle an outstanding confirmation. No-op if none is pending.
    pub fn answer_confirm(&mut self, yes: bool) {
        match self.pending.take() {
            Some(PendingConfirm::FlipMystery) if yes => {
                self.emit(OutboundEvent::FlipMysteryCard {});
            }
            Some(PendingConfirm::FlipMystery) => {
                debug!("[SESSION] mystery flip declined");
            }
            None => debug!("[SESSION] no confirmation pending"),
        }
    }

    /// Resolve an exact card id or a unique id prefix among cards on the table.
    pub fn find_card(&self, prefix: &str) -> Result<CardId, LookupError> {
        let ids: BTreeSet<&String> = self
            .snapshot
            .my_cards
            .keys()
            .chain(self.snapshot.visible_cards.keys())
            .collect();

        if let Some(exact) = ids.iter().find(|id| id.as_str() == prefix) {
            return Ok((*exact).clone());
        }

        let matches: Vec<&&String> = ids.iter().filter(|id| id.starts_with(prefix)).collect();
        match matches.as_slice() {
            [only] => Ok((**only).clone()),
            [] => Err(LookupError::NotFound(prefix.to_string())),
            many => Err(LookupError::Ambiguous {
                prefix: prefix.to_string(),
                count: many.len(),
            }),
        }
    }

    fn emit(&self, event: OutboundEvent) {
        debug!(event = event.name(), "[SESSION] emit");
        if self.emitter.send(event).is_err() {
            warn!("[SESSION] connection closed; event dropped");
        }
    }

    fn menu_options(&self, card_id: &str) -> Vec<MenuOption> {
        let (Some(card), Some(player)) = (
            self.snapshot.my_card(card_id),
            self.snapshot.player(&self.player_id),
        ) else {
            return Vec::new();
        };
        options_for(card, player)
    }

    fn open_menu(&mut self, card_id: CardId, anchor: Point) {
        let options = self.menu_options(&card_id);
        if options.is_empty() {
            debug!(card_id = %card_id, "[SESSION] card has no actions");
            return;
        }
        self.menu = Some(ContextMenu {
            card_id,
            anchor,
            options,
        });
    }

    fn pick_menu_item(&mut self, index: usize) -> Option<Notice> {
        let menu = self.menu.as_ref()?;
        let picked = menu.options.get(index).map(|o| (o.enabled, o.action));
        let card_id = menu.card_id.clone();
        match picked {
            Some((true, action)) => {
                self.menu = None;
                for event in action.messages(&card_id) {
                    self.emit(event);
                }
            }
            Some((false, _)) => {}
            None => self.menu = None,
        }
        None
    }

    fn click_pile(&mut self, pile: PileKind) -> Option<Notice> {
        match pile {
            PileKind::Deck => {
                self.emit(OutboundEvent::DrawCard {});
                None
            }
            PileKind::Mystery => {
                if self.snapshot.turn_number >= MYSTERY_MIN_TURN {
                    self.pending = Some(PendingConfirm::FlipMystery);
                    Some(Notice::Confirm(MYSTERY_CONFIRM.to_string()))
                } else {
                    Some(Notice::Alert(MYSTERY_TOO_EARLY.to_string()))
                }
            }
            PileKind::Discard | PileKind::Ink => {
                self.open_modal(pile);
                None
            }
        }
    }

    fn open_modal(&mut self, pile: PileKind) {
        let Some(title) = modal_title(pile) else {
            return;
        };
        self.modal = Some(PileModal {
            title,
            pile,
            cards: own_pile_cards(&self.snapshot, &self.player_id, pile),
        });
    }

    fn reconcile_overlays(&mut self) {
        if let Some(card_id) = self.menu.as_ref().map(|m| m.card_id.clone()) {
            let options = self.menu_options(&card_id);
            match self.menu.as_mut() {
                Some(menu) if !options.is_empty() => menu.options = options,
                _ => {
                    debug!(card_id = %card_id, "[SESSION] menu closed by update");
                    self.menu = None;
                }
            }
        }
        if let Some(pile) = self.modal.as_ref().map(|m| m.pile) {
            self.open_modal(pile);
        }
    }
}

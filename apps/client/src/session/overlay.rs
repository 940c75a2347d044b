use crate::domain::{CardElement, CardId, MenuOption, PileKind, ViewTree};

/// Pointer position a context menu is anchored at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub card_id: CardId,
    pub anchor: Point,
    pub options: Vec<MenuOption>,
}

/// Read-only listing of one of the viewer's piles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PileModal {
    pub title: &'static str,
    pub pile: PileKind,
    pub cards: Vec<CardElement>,
}

/// Title for piles that open a modal; `None` for the rest.
pub fn modal_title(pile: PileKind) -> Option<&'static str> {
    match pile {
        PileKind::Discard => Some("Discard Pile"),
        PileKind::Ink => Some("Ink Pile"),
        PileKind::Deck | PileKind::Mystery => None,
    }
}

/// Everything a painter needs for one repaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub view: ViewTree,
    pub menu: Option<ContextMenu>,
    pub modal: Option<PileModal>,
    /// Question awaiting a yes/no answer.
    pub confirm: Option<String>,
}

impl Frame {
    pub fn board(view: ViewTree) -> Self {
        Self {
            view,
            menu: None,
            modal: None,
            confirm: None,
        }
    }
}

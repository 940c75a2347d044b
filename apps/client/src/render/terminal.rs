use std::fmt::Write as _;
use std::io::Write;

use crate::domain::{
    CardElement, CardFace, HiddenPile, OpponentBoard, OwnBoard, PileKind, ViewTree,
    FACE_DOWN_GLYPH,
};
use crate::error::ClientError;
use crate::render::Painter;
use crate::session::overlay::{ContextMenu, Frame, PileModal};

/// Most placeholders drawn for a hidden pile; the count is always printed.
const MAX_PLACEHOLDERS: u32 = 5;

/// Text painter over any writer. Identical frames are not repainted.
pub struct TerminalPainter<W: Write + Send> {
    out: W,
    last: Option<Frame>,
}

impl<W: Write + Send> TerminalPainter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, text: &str) -> Result<(), ClientError> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> Painter for TerminalPainter<W> {
    fn loading(&mut self) -> Result<(), ClientError> {
        self.write_block("Loading game...")
    }

    fn loading_failed(&mut self, err: &ClientError) -> Result<(), ClientError> {
        self.last = None;
        self.write_block(&err.to_string())
    }

    fn paint(&mut self, frame: &Frame) -> Result<(), ClientError> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }
        let text = render_frame(frame);
        self.write_block(&text)?;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<(), ClientError> {
        self.write_block(&format!("!! {message}"))
    }

    fn confirm_prompt(&mut self, question: &str) -> Result<(), ClientError> {
        self.write_block(&format!("?? {question} (yes/no)"))
    }

    fn info(&mut self, message: &str) -> Result<(), ClientError> {
        self.write_block(message)
    }
}

/// Full text rendering of a frame, opponents first, own board last.
/// Pending confirmations are shown through `confirm_prompt` instead.
pub fn render_frame(frame: &Frame) -> String {
    let mut out = String::new();
    render_view(&mut out, &frame.view);
    if let Some(menu) = &frame.menu {
        render_menu(&mut out, menu);
    }
    if let Some(modal) = &frame.modal {
        render_modal(&mut out, modal);
    }
    out
}

fn render_view(out: &mut String, view: &ViewTree) {
    let current = view.header.current_player.as_deref().unwrap_or("-");
    let _ = writeln!(
        out,
        "== Turn {} | Current: {} [{}] ==",
        view.header.turn_number,
        current,
        view.layout.class_name()
    );
    for board in &view.opponents {
        render_opponent(out, board);
    }
    if let Some(own) = &view.own {
        render_own(out, own);
    }
}

fn render_opponent(out: &mut String, board: &OpponentBoard) {
    let _ = writeln!(
        out,
        "-- {} ({}) lore {}/{}{}",
        board.username,
        board.player_id,
        board.lore.value,
        board.lore.target,
        turn_marker(board.is_current_turn)
    );
    let hidden: Vec<String> = board.hidden.iter().map(render_hidden).collect();
    let _ = writeln!(out, "   {}", hidden.join("  "));
    let _ = writeln!(
        out,
        "   discard {}  ink {}",
        board.discard_count, board.ink_count
    );
    render_row(out, "ready", &board.ready);
    render_row(out, "summoning", &board.summoning);
    if !board.discard.is_empty() {
        render_row(out, "discard", &board.discard);
    }
    if !board.ink.is_empty() {
        render_row(out, "ink", &board.ink);
    }
}

fn render_own(out: &mut String, own: &OwnBoard) {
    let _ = writeln!(
        out,
        "-- {} ({}) lore {}/{}{}",
        own.username,
        own.player_id,
        own.lore.value,
        own.lore.target,
        turn_marker(own.is_current_turn)
    );
    let piles: Vec<String> = own
        .piles
        .iter()
        .map(|p| format!("{} {}", pile_label(p.kind), p.count))
        .collect();
    let inked = if own.has_inked_this_turn {
        "  (inked this turn)"
    } else {
        ""
    };
    let _ = writeln!(out, "   {}{}", piles.join(" | "), inked);
    render_row(out, "hand", &own.hand);
    render_row(out, "ready", &own.ready);
    render_row(out, "summoning", &own.summoning);
}

fn render_hidden(pile: &HiddenPile) -> String {
    let glyphs = FACE_DOWN_GLYPH.repeat(pile.count.min(MAX_PLACEHOLDERS) as usize);
    format!("{} {} {}", pile.zone, pile.count, glyphs)
        .trim_end()
        .to_string()
}

fn render_row(out: &mut String, label: &str, cards: &[CardElement]) {
    let cards: Vec<String> = cards.iter().map(render_card).collect();
    let _ = writeln!(out, "   {label}: {}", cards.join(" "));
}

fn render_menu(out: &mut String, menu: &ContextMenu) {
    let _ = writeln!(out, ">> {}", menu.card_id);
    for (i, option) in menu.options.iter().enumerate() {
        let disabled = if option.enabled { "" } else { " (disabled)" };
        let _ = writeln!(out, "   {}. {}{}", i + 1, option.label, disabled);
    }
}

fn render_modal(out: &mut String, modal: &PileModal) {
    let _ = writeln!(out, "## {} ({})", modal.title, modal.cards.len());
    for card in &modal.cards {
        let _ = writeln!(out, "   {}", render_card(card));
    }
}

pub(crate) fn render_card(card: &CardElement) -> String {
    let face = match &card.face {
        CardFace::Art { .. } => card.name.as_deref().unwrap_or(card.card_id.as_str()),
        CardFace::FaceDown => FACE_DOWN_GLYPH,
    };
    let mut text = format!("[{} {}", card.card_id, face);
    if card.exerted {
        text.push_str(" exerted");
    }
    if let Some(damage) = card.damage {
        let _ = write!(text, " dmg {damage}");
    }
    text.push(']');
    text
}

fn pile_label(kind: PileKind) -> &'static str {
    kind.zone().as_str()
}

fn turn_marker(current: bool) -> &'static str {
    if current {
        " *turn*"
    } else {
        ""
    }
}

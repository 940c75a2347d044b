//! Domain layer: snapshot types, view projection and card menus.
//!
//! Everything here is pure. No I/O, no clocks, no global state.

pub mod menu;
pub mod snapshot;
pub mod view;
pub mod zones;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_view;
#[cfg(test)]
mod tests_view;

// Re-exports for ergonomics
pub use menu::{options_for, CardAction, MenuOption, QUEST_LORE};
pub use snapshot::{
    CardData, CardId, CardView, PlayerId, PlayerView, PlayerZones, Snapshot, ZoneCounts,
    LORE_TARGET,
};
pub use view::{
    own_pile_cards, project, CardElement, CardFace, HiddenPile, Layout, LoreCounter,
    OpponentBoard, OwnBoard, PileView, TurnHeader, ViewTree, FACE_DOWN_GLYPH,
};
pub use zones::{PileKind, Zone};

// Proptest generators for snapshot types.
// Generated snapshots are internally consistent, except those from
// `snapshot_with_dangling_ids`.

use proptest::prelude::*;
use proptest::test_runner::Config;

use crate::domain::test_snapshot_helpers::{card, give_viewer, player, VIEWER};
use crate::domain::{CardView, Snapshot, Zone};

pub fn proptest_config() -> Config {
    Config {
        cases: 128,
        ..Config::default()
    }
}

pub fn zone() -> impl Strategy<Value = Zone> {
    prop_oneof![
        Just(Zone::Deck),
        Just(Zone::Hand),
        Just(Zone::Ready),
        Just(Zone::Summoning),
        Just(Zone::Discard),
        Just(Zone::Ink),
        Just(Zone::Mystery),
    ]
}

/// A card in the given owner's hands with random state.
pub fn card_for(owner: &'static str, id_prefix: &'static str) -> impl Strategy<Value = CardView> {
    (
        0u32..1000,
        zone(),
        any::<bool>(),
        0u32..6,
        any::<bool>(),
        0u32..10,
    )
        .prop_map(move |(n, zone, exerted, damage, has_art, position)| {
            let mut c = card(&format!("{id_prefix}{n}"), owner, zone);
            c.exerted = exerted;
            c.damage = damage;
            c.position = position;
            if !has_art {
                c.image_url = None;
                c.card_data = None;
            }
            c
        })
}

/// Snapshot with the viewer, 1..=3 opponents, own cards and revealed
/// opponent cards (including ones in zones that must stay hidden).
pub fn snapshot() -> impl Strategy<Value = Snapshot> {
    (
        1usize..=3,
        prop::collection::vec(card_for(VIEWER, "m"), 0..20),
        prop::collection::vec(
            (0usize..3, card_for("p2", "v")),
            0..20,
        ),
        1u32..12,
        any::<bool>(),
        prop::collection::vec(0u32..60, 7),
    )
        .prop_map(|(opponents, own, revealed, turn, inked, counts)| {
            let mut snapshot = Snapshot {
                game_id: Some("g".into()),
                turn_number: turn,
                current_turn: Some(VIEWER.into()),
                ..Snapshot::default()
            };
            let mut me = player(VIEWER, "You");
            me.has_inked_this_turn = inked;
            snapshot.players.insert(VIEWER.into(), me);
            snapshot.player_order.push(VIEWER.into());

            let opponent_ids: Vec<String> = (0..opponents).map(|i| format!("o{i}")).collect();
            for (i, id) in opponent_ids.iter().enumerate() {
                let mut them = player(id, &format!("Player {}", i + 2));
                them.zone_counts.deck = counts[0];
                them.zone_counts.hand = counts[1];
                them.zone_counts.mystery = counts[2].min(1);
                them.zone_counts.discard = counts[3];
                them.zone_counts.ink = counts[4];
                snapshot.players.insert(id.clone(), them);
                snapshot.player_order.push(id.clone());
            }

            for c in own {
                if !snapshot.my_cards.contains_key(&c.id) {
                    give_viewer(&mut snapshot, c);
                }
            }
            for (seat, mut c) in revealed {
                let owner = &opponent_ids[seat % opponent_ids.len()];
                c.owner = Some(owner.clone());
                snapshot.visible_cards.insert(c.id.clone(), c);
            }
            snapshot
        })
}

/// `snapshot()` with unresolvable card ids mixed into the viewer's hand and
/// ready zones.
pub fn snapshot_with_dangling_ids() -> impl Strategy<Value = Snapshot> {
    (snapshot(), 1usize..5, 0usize..5).prop_map(|(mut snapshot, in_hand, in_ready)| {
        if let Some(me) = snapshot.players.get_mut(VIEWER) {
            for i in 0..in_hand {
                me.zones.hand.push(format!("ghost-h{i}"));
            }
            for i in 0..in_ready {
                me.zones.ready.insert(0, format!("ghost-r{i}"));
            }
        }
        snapshot
    })
}

/// Property-based tests for the snapshot projection
use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_snapshot_helpers::VIEWER;
use crate::domain::{project, Zone};

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: Projection is idempotent
    /// Projecting the same snapshot twice yields the same tree.
    #[test]
    fn prop_projection_is_idempotent(snapshot in test_gens::snapshot()) {
        prop_assert_eq!(project(&snapshot, VIEWER), project(&snapshot, VIEWER));
    }

    /// Property: Opponent hidden zones never leak identities
    /// No opponent card element comes from deck, mystery or hand, and hidden
    /// piles carry exactly the server-reported counts.
    #[test]
    fn prop_opponent_hidden_zones_are_counts_only(snapshot in test_gens::snapshot()) {
        let view = project(&snapshot, VIEWER);
        for board in &view.opponents {
            let elements = board.ready.iter()
                .chain(&board.summoning)
                .chain(&board.discard)
                .chain(&board.ink);
            for element in elements {
                prop_assert!(!element.zone.is_hidden_from_opponents(),
                    "card {} leaked from {}", element.card_id, element.zone);
                prop_assert!(!element.interactive);
            }
            let player = &snapshot.players[&board.player_id];
            for pile in &board.hidden {
                prop_assert_eq!(pile.count, player.zone_counts.get(pile.zone));
            }
        }
    }

    /// Property: Own zones render every resolvable card exactly once
    #[test]
    fn prop_own_zones_match_snapshot(snapshot in test_gens::snapshot()) {
        let view = project(&snapshot, VIEWER);
        let own = view.own.expect("viewer is seated");
        let me = &snapshot.players[VIEWER];
        prop_assert_eq!(own.hand.len(), me.zones.hand.len());
        prop_assert_eq!(own.ready.len(), me.zones.ready.len());
        prop_assert_eq!(own.summoning.len(), me.zones.summoning.len());
        prop_assert!(own.hand.iter().all(|c| c.zone == Zone::Hand));
        prop_assert!(own.ready.iter().all(|c| c.damage.map_or(true, |d| d > 0)));
    }

    /// Property: One board per opponent
    #[test]
    fn prop_one_board_per_opponent(snapshot in test_gens::snapshot()) {
        let view = project(&snapshot, VIEWER);
        prop_assert_eq!(view.opponents.len(), snapshot.players.len() - 1);
    }

    /// Property: Dangling ids are skipped, resolvable neighbours survive
    #[test]
    fn prop_dangling_ids_never_render(snapshot in test_gens::snapshot_with_dangling_ids()) {
        let view = project(&snapshot, VIEWER);
        let own = view.own.expect("viewer is seated");
        let me = &snapshot.players[VIEWER];
        let resolvable = |ids: &[String]| ids.iter().filter(|id| snapshot.my_cards.contains_key(*id)).count();
        prop_assert_eq!(own.hand.len(), resolvable(&me.zones.hand));
        prop_assert_eq!(own.ready.len(), resolvable(&me.zones.ready));
        prop_assert!(own.hand.iter().chain(&own.ready).all(|c| !c.card_id.starts_with("ghost-")));
    }
}

use crate::domain::test_snapshot_helpers::{
    card, give_viewer, own_card, player, two_player_snapshot, OPPONENT, VIEWER,
};
use crate::domain::{own_pile_cards, project, CardFace, Layout, PileKind, Zone};

#[test]
fn own_board_renders_zones_in_order() {
    let mut snapshot = two_player_snapshot();
    give_viewer(&mut snapshot, own_card("h1", Zone::Hand));
    give_viewer(&mut snapshot, own_card("h2", Zone::Hand));
    give_viewer(&mut snapshot, own_card("r1", Zone::Ready));
    give_viewer(&mut snapshot, own_card("s1", Zone::Summoning));

    let view = project(&snapshot, VIEWER);
    let own = view.own.expect("viewer board");
    let ids = |cards: &[crate::domain::CardElement]| {
        cards.iter().map(|c| c.card_id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&own.hand), vec!["h1", "h2"]);
    assert_eq!(ids(&own.ready), vec!["r1"]);
    assert_eq!(ids(&own.summoning), vec!["s1"]);
    assert!(own.hand.iter().all(|c| c.interactive));
    assert!(own.is_current_turn);
}

#[test]
fn own_piles_show_counts() {
    let mut snapshot = two_player_snapshot();
    {
        let me = snapshot.players.get_mut(VIEWER).unwrap();
        me.zone_counts.deck = 40;
        me.zone_counts.mystery = 1;
        me.zone_counts.discard = 3;
        me.zone_counts.ink = 2;
        me.lore = 7;
    }
    let own = project(&snapshot, VIEWER).own.unwrap();
    let counts: Vec<(PileKind, u32)> = own.piles.iter().map(|p| (p.kind, p.count)).collect();
    assert_eq!(
        counts,
        vec![
            (PileKind::Deck, 40),
            (PileKind::Mystery, 1),
            (PileKind::Discard, 3),
            (PileKind::Ink, 2),
        ]
    );
    assert_eq!(own.lore.value, 7);
    assert_eq!(own.lore.target, 20);
}

#[test]
fn card_element_falls_back_to_face_down_glyph() {
    let mut snapshot = two_player_snapshot();
    let mut blank = own_card("h1", Zone::Hand);
    blank.image_url = None;
    blank.damage = 2;
    blank.exerted = true;
    give_viewer(&mut snapshot, blank);

    let own = project(&snapshot, VIEWER).own.unwrap();
    let element = &own.hand[0];
    assert_eq!(element.face, CardFace::FaceDown);
    assert_eq!(element.damage, Some(2));
    assert!(element.exerted);
}

#[test]
fn undamaged_card_has_no_badge() {
    let mut snapshot = two_player_snapshot();
    give_viewer(&mut snapshot, own_card("h1", Zone::Hand));
    let own = project(&snapshot, VIEWER).own.unwrap();
    assert_eq!(own.hand[0].damage, None);
    assert!(matches!(own.hand[0].face, CardFace::Art { .. }));
}

#[test]
fn dangling_card_id_is_skipped() {
    let mut snapshot = two_player_snapshot();
    give_viewer(&mut snapshot, own_card("h1", Zone::Hand));
    snapshot
        .players
        .get_mut(VIEWER)
        .unwrap()
        .zones
        .hand
        .push("ghost".into());

    let own = project(&snapshot, VIEWER).own.unwrap();
    assert_eq!(own.hand.len(), 1);
    assert_eq!(own.hand[0].card_id, "h1");
}

#[test]
fn missing_viewer_degrades_to_opponents_only() {
    let snapshot = two_player_snapshot();
    let view = project(&snapshot, "stranger");
    assert!(view.own.is_none());
    assert_eq!(view.opponents.len(), 2);
}

#[test]
fn missing_current_player_leaves_header_blank() {
    let mut snapshot = two_player_snapshot();
    snapshot.current_turn = Some("nobody".into());
    let view = project(&snapshot, VIEWER);
    assert_eq!(view.header.current_player, None);
}

#[test]
fn header_names_current_player() {
    let mut snapshot = two_player_snapshot();
    snapshot.turn_number = 4;
    snapshot.current_turn = Some(OPPONENT.into());
    let view = project(&snapshot, VIEWER);
    assert_eq!(view.header.turn_number, 4);
    assert_eq!(view.header.current_player.as_deref(), Some("Player 2"));
    assert!(view.opponents[0].is_current_turn);
}

#[test]
fn layout_follows_player_count() {
    let mut snapshot = two_player_snapshot();
    assert_eq!(project(&snapshot, VIEWER).layout, Layout::HeadsUp);
    snapshot.players.insert("p3".into(), player("p3", "Player 3"));
    snapshot.player_order.push("p3".into());
    let view = project(&snapshot, VIEWER);
    assert_eq!(view.layout, Layout::Multiplayer);
    assert_eq!(view.layout.class_name(), "players-3plus");
}

#[test]
fn opponents_follow_seat_rotation() {
    let mut snapshot = two_player_snapshot();
    snapshot.players.insert("p3".into(), player("p3", "Player 3"));
    snapshot.players.insert("p0".into(), player("p0", "Player 0"));
    snapshot.player_order = vec!["p3".into(), VIEWER.into(), "p0".into(), OPPONENT.into()];

    let view = project(&snapshot, VIEWER);
    let order: Vec<&str> = view.opponents.iter().map(|b| b.player_id.as_str()).collect();
    assert_eq!(order, vec!["p0", OPPONENT, "p3"]);
}

#[test]
fn opponent_board_shows_counts_and_visible_cards_only() {
    let mut snapshot = two_player_snapshot();
    {
        let them = snapshot.players.get_mut(OPPONENT).unwrap();
        them.zone_counts.deck = 45;
        them.zone_counts.mystery = 1;
        them.zone_counts.hand = 6;
        them.zone_counts.discard = 1;
    }
    let mut second = card("o2", OPPONENT, Zone::Ready);
    second.position = 1;
    let mut first = card("o9", OPPONENT, Zone::Ready);
    first.position = 0;
    snapshot.visible_cards.insert("o2".into(), second);
    snapshot.visible_cards.insert("o9".into(), first);
    snapshot
        .visible_cards
        .insert("o3".into(), card("o3", OPPONENT, Zone::Summoning));
    snapshot
        .visible_cards
        .insert("o4".into(), card("o4", OPPONENT, Zone::Discard));
    // Face-up hand cards leak into the visible map; they must stay hidden.
    snapshot
        .visible_cards
        .insert("o5".into(), card("o5", OPPONENT, Zone::Hand));

    let board = &project(&snapshot, VIEWER).opponents[0];
    let hidden: Vec<(Zone, u32)> = board.hidden.iter().map(|h| (h.zone, h.count)).collect();
    assert_eq!(
        hidden,
        vec![(Zone::Deck, 45), (Zone::Mystery, 1), (Zone::Hand, 6)]
    );
    let ready: Vec<&str> = board.ready.iter().map(|c| c.card_id.as_str()).collect();
    assert_eq!(ready, vec!["o9", "o2"]);
    assert_eq!(board.summoning.len(), 1);
    assert_eq!(board.discard.len(), 1);
    assert!(board.ready.iter().all(|c| !c.interactive));

    let all_ids: Vec<&str> = board
        .ready
        .iter()
        .chain(&board.summoning)
        .chain(&board.discard)
        .chain(&board.ink)
        .map(|c| c.card_id.as_str())
        .collect();
    assert!(!all_ids.contains(&"o5"));
}

#[test]
fn visible_cards_are_matched_to_their_owner() {
    let mut snapshot = two_player_snapshot();
    snapshot.players.insert("p3".into(), player("p3", "Player 3"));
    snapshot.player_order.push("p3".into());
    snapshot
        .visible_cards
        .insert("x".into(), card("x", "p3", Zone::Ready));

    let view = project(&snapshot, VIEWER);
    assert!(view.opponents[0].ready.is_empty());
    assert_eq!(view.opponents[1].ready[0].card_id, "x");
}

#[test]
fn pile_cards_resolve_in_pile_order() {
    let mut snapshot = two_player_snapshot();
    give_viewer(&mut snapshot, own_card("d2", Zone::Discard));
    give_viewer(&mut snapshot, own_card("d1", Zone::Discard));
    let mut ink = own_card("i1", Zone::Ink);
    ink.image_url = None;
    give_viewer(&mut snapshot, ink);

    let discard = own_pile_cards(&snapshot, VIEWER, PileKind::Discard);
    let ids: Vec<&str> = discard.iter().map(|c| c.card_id.as_str()).collect();
    assert_eq!(ids, vec!["d2", "d1"]);
    assert!(discard.iter().all(|c| !c.interactive));

    let ink = own_pile_cards(&snapshot, VIEWER, PileKind::Ink);
    assert_eq!(ink[0].face, CardFace::FaceDown);
}

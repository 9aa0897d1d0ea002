//! Drag-and-drop tests on arranged positions.
//!
//! Positions use a 100x140 card: lane `i` is anchored at
//! `(520 + 130 * i, 200)` with a 45px cascade, foundation `k` at
//! `(910 + 130 * k, 30)`.

use solitaire_table::table::{BodyId, Table};
use solitaire_table::{
    CardId, CardStack, FrameInput, PointerButton, Rank, SizeTable, StackId, Suit, TableConfig,
    TableError, Vec2,
};

const FRAME: f32 = 1.0 / 60.0;

fn blank() -> Table {
    Table::blank(TableConfig::default(), &SizeTable::standard(100.0, 140.0)).unwrap()
}

fn card(table: &Table, suit: Suit, rank: u8) -> CardId {
    table.card_id(suit, Rank::new(rank).unwrap()).unwrap()
}

fn settle(table: &mut Table) {
    for _ in 0..10_000 {
        if table.is_settled() {
            return;
        }
        table.update(&FrameInput::idle(FRAME, Vec2::ZERO));
    }
    panic!("table never settled");
}

/// Let any double-click window close.
fn pause(table: &mut Table) {
    for _ in 0..45 {
        table.update(&FrameInput::idle(FRAME, Vec2::ZERO));
    }
}

fn drag(table: &mut Table, from: Vec2, to: Vec2) {
    table.update(&FrameInput::new(FRAME, from, PointerButton::press()));
    table.update(&FrameInput::new(FRAME, to, PointerButton::hold()));
    table.update(&FrameInput::new(FRAME, to, PointerButton::release()));
    settle(table);
    pause(table);
}

fn arrange(table: &mut Table, lane: usize, cards: &[(CardId, bool)]) {
    for &(id, face_up) in cards {
        table.place_in_lane(lane, id, face_up).unwrap();
    }
    settle(table);
}

fn lane_cards(table: &Table, lane: usize) -> Vec<CardId> {
    table.lane(lane).unwrap().cards().to_vec()
}

/// Every owner names a stack holding the card, and every member names its stack.
fn assert_ownership_consistent(table: &Table) {
    for (id, card) in table.cards().iter() {
        if let Some(owner) = card.owner {
            assert!(table.stack(owner).unwrap().contains(id), "{} claims {}", id, owner);
        }
    }
    let stacks: Vec<&dyn CardStack> = std::iter::once(table.deck() as &dyn CardStack)
        .chain(table.lanes().iter().map(|l| l as &dyn CardStack))
        .chain(table.foundations().iter().map(|f| f as &dyn CardStack))
        .collect();
    for stack in stacks {
        for &id in stack.cards() {
            assert_eq!(table.cards()[id].owner, Some(stack.id()));
        }
    }
}

#[test]
fn test_pick_up_follows_pointer() {
    let mut table = blank();
    let h7 = card(&table, Suit::Hearts, 7);
    arrange(&mut table, 1, &[(h7, true)]);

    table.update(&FrameInput::new(FRAME, Vec2::new(700.0, 250.0), PointerButton::press()));
    assert_eq!(table.held(), &[h7]);
    assert_eq!(table.card(h7).unwrap().z, 100);

    table.update(&FrameInput::new(FRAME, Vec2::new(800.0, 400.0), PointerButton::hold()));
    assert_eq!(table.card(h7).unwrap().position, Vec2::new(750.0, 350.0));
}

#[test]
fn test_drop_on_lane_top() {
    let mut table = blank();
    let s8 = card(&table, Suit::Spades, 8);
    let h7 = card(&table, Suit::Hearts, 7);
    arrange(&mut table, 0, &[(s8, true)]);
    arrange(&mut table, 1, &[(h7, true)]);

    drag(&mut table, Vec2::new(700.0, 250.0), Vec2::new(570.0, 260.0));

    assert_eq!(lane_cards(&table, 0), vec![s8, h7]);
    assert!(table.lane(1).unwrap().is_empty());
    let moved = table.card(h7).unwrap();
    assert_eq!(moved.owner, Some(StackId::Lane(0)));
    assert_eq!(moved.position, Vec2::new(520.0, 245.0));
    assert_eq!(moved.z, 2);
    assert!(moved.can_grab());
    assert!(table.held().is_empty());
}

#[test]
fn test_rejected_drop_returns_home() {
    let mut table = blank();
    let s9 = card(&table, Suit::Spades, 9);
    let h7 = card(&table, Suit::Hearts, 7);
    arrange(&mut table, 0, &[(s9, true)]);
    arrange(&mut table, 1, &[(h7, true)]);

    drag(&mut table, Vec2::new(700.0, 250.0), Vec2::new(570.0, 260.0));

    assert_eq!(lane_cards(&table, 0), vec![s9]);
    assert_eq!(lane_cards(&table, 1), vec![h7]);
    let back = table.card(h7).unwrap();
    assert_eq!(back.position, Vec2::new(650.0, 200.0));
    assert_eq!(back.z, 1);
    assert!(back.can_grab());
}

#[test]
fn test_same_color_is_rejected() {
    let mut table = blank();
    let d8 = card(&table, Suit::Diamonds, 8);
    let h7 = card(&table, Suit::Hearts, 7);
    arrange(&mut table, 0, &[(d8, true)]);
    arrange(&mut table, 1, &[(h7, true)]);

    drag(&mut table, Vec2::new(700.0, 250.0), Vec2::new(570.0, 260.0));
    assert_eq!(lane_cards(&table, 1), vec![h7]);
}

#[test]
fn test_run_moves_together_and_flips_new_top() {
    let mut table = blank();
    let s9 = card(&table, Suit::Spades, 9);
    let c3 = card(&table, Suit::Clubs, 3);
    let h8 = card(&table, Suit::Hearts, 8);
    let c7 = card(&table, Suit::Clubs, 7);
    arrange(&mut table, 0, &[(s9, true)]);
    arrange(&mut table, 1, &[(c3, false), (h8, true), (c7, true)]);

    // Grab the eight by its exposed strip; the seven comes along.
    table.update(&FrameInput::new(FRAME, Vec2::new(700.0, 260.0), PointerButton::press()));
    assert_eq!(table.held(), &[h8, c7]);
    assert_eq!(table.card(h8).unwrap().z, 99);
    assert_eq!(table.card(c7).unwrap().z, 100);

    table.update(&FrameInput::new(FRAME, Vec2::new(570.0, 235.0), PointerButton::hold()));
    table.update(&FrameInput::new(FRAME, Vec2::new(570.0, 235.0), PointerButton::release()));
    settle(&mut table);

    assert_eq!(lane_cards(&table, 0), vec![s9, h8, c7]);
    assert_eq!(table.card(h8).unwrap().position, Vec2::new(520.0, 245.0));
    assert_eq!(table.card(c7).unwrap().position, Vec2::new(520.0, 290.0));
    assert_eq!(table.card(c7).unwrap().owner, Some(StackId::Lane(0)));

    assert_eq!(lane_cards(&table, 1), vec![c3]);
    let exposed = table.card(c3).unwrap();
    assert!(exposed.is_face_up());
    assert!(exposed.can_grab());
}

#[test]
fn test_invalid_run_has_no_destination() {
    let mut table = blank();
    let s9 = card(&table, Suit::Spades, 9);
    let h8 = card(&table, Suit::Hearts, 8);
    let s6 = card(&table, Suit::Spades, 6);
    arrange(&mut table, 0, &[(s9, true)]);
    arrange(&mut table, 1, &[(h8, true), (s6, true)]);

    drag(&mut table, Vec2::new(700.0, 210.0), Vec2::new(570.0, 215.0));

    assert_eq!(lane_cards(&table, 0), vec![s9]);
    assert_eq!(lane_cards(&table, 1), vec![h8, s6]);
    assert_eq!(table.card(h8).unwrap().position, Vec2::new(650.0, 200.0));
    assert_eq!(table.card(s6).unwrap().position, Vec2::new(650.0, 245.0));
    assert_eq!(table.card(s6).unwrap().z, 2);
}

#[test]
fn test_king_to_empty_lane() {
    let mut table = blank();
    let d5 = card(&table, Suit::Diamonds, 5);
    let ck = card(&table, Suit::Clubs, 13);
    arrange(&mut table, 1, &[(d5, false), (ck, true)]);

    drag(&mut table, Vec2::new(700.0, 300.0), Vec2::new(570.0, 295.0));

    assert_eq!(lane_cards(&table, 0), vec![ck]);
    assert_eq!(table.card(ck).unwrap().position, Vec2::new(520.0, 200.0));
    assert_eq!(lane_cards(&table, 1), vec![d5]);
    assert!(table.card(d5).unwrap().is_face_up());
}

#[test]
fn test_non_king_refused_by_empty_lane() {
    let mut table = blank();
    let cq = card(&table, Suit::Clubs, 12);
    arrange(&mut table, 1, &[(cq, true)]);

    drag(&mut table, Vec2::new(700.0, 250.0), Vec2::new(570.0, 255.0));
    assert!(table.lane(0).unwrap().is_empty());
    assert_eq!(lane_cards(&table, 1), vec![cq]);
}

#[test]
fn test_nearer_of_two_targets_wins() {
    let mut table = blank();
    let s8 = card(&table, Suit::Spades, 8);
    let c8 = card(&table, Suit::Clubs, 8);
    let h7 = card(&table, Suit::Hearts, 7);
    arrange(&mut table, 0, &[(s8, true)]);
    arrange(&mut table, 1, &[(c8, true)]);
    arrange(&mut table, 3, &[(h7, true)]);

    // Lands at x = 600: 20px over lane 0, 50px over lane 1.
    drag(&mut table, Vec2::new(920.0, 250.0), Vec2::new(610.0, 260.0));

    assert_eq!(lane_cards(&table, 0), vec![s8]);
    assert_eq!(lane_cards(&table, 1), vec![c8, h7]);
    assert_eq!(table.card(h7).unwrap().position, Vec2::new(650.0, 245.0));
}

#[test]
fn test_ace_dragged_to_foundation() {
    let mut table = blank();
    let d9 = card(&table, Suit::Diamonds, 9);
    let ha = card(&table, Suit::Hearts, 1);
    arrange(&mut table, 2, &[(d9, false), (ha, true)]);

    drag(&mut table, Vec2::new(800.0, 260.0), Vec2::new(1060.0, 90.0));

    assert_eq!(lane_cards(&table, 2), vec![d9]);
    let exposed = table.card(d9).unwrap();
    assert!(exposed.is_face_up() && exposed.can_grab());

    let foundation = table.foundation(1).unwrap();
    assert_eq!(foundation.top(), Some(ha));
    let placed = table.card(ha).unwrap();
    assert_eq!(placed.position, Vec2::new(1040.0, 30.0));
    assert_eq!(placed.owner, Some(StackId::Foundation(1)));
    assert!(!placed.can_grab());

    // Foundation cards stay put.
    table.update(&FrameInput::new(FRAME, Vec2::new(1050.0, 40.0), PointerButton::press()));
    assert!(table.held().is_empty());
    table.update(&FrameInput::new(FRAME, Vec2::new(1050.0, 40.0), PointerButton::release()));

    assert_eq!(
        table.transfer(ha, StackId::Lane(2)),
        Err(TableError::AppendOnly(StackId::Foundation(1)))
    );
    settle(&mut table);
    assert_eq!(table.foundation(1).unwrap().top(), Some(ha));
    assert_eq!(table.card(ha).unwrap().owner, Some(StackId::Foundation(1)));
    let lane = table.lane(2).unwrap();
    assert_eq!(lane.top(), Some(d9));
    assert!(table.card(d9).unwrap().is_face_up());
}

#[test]
fn test_run_never_goes_to_foundation() {
    let mut table = blank();
    let ha = card(&table, Suit::Hearts, 1);
    let h2 = card(&table, Suit::Hearts, 2);
    let sa = card(&table, Suit::Spades, 1);
    table.place_on_foundation(0, ha).unwrap();
    arrange(&mut table, 3, &[(h2, true), (sa, true)]);

    drag(&mut table, Vec2::new(920.0, 210.0), Vec2::new(920.0, 40.0));

    assert_eq!(table.foundation(0).unwrap().len(), 1);
    assert_eq!(lane_cards(&table, 3), vec![h2, sa]);
}

#[test]
fn test_double_click_sends_to_foundation() {
    let mut table = blank();
    let sa = card(&table, Suit::Spades, 1);
    arrange(&mut table, 3, &[(sa, true)]);

    let at = Vec2::new(950.0, 250.0);
    for _ in 0..2 {
        table.update(&FrameInput::new(FRAME, at, PointerButton::press()));
        table.update(&FrameInput::new(FRAME, at, PointerButton::release()));
    }
    settle(&mut table);

    assert_eq!(table.foundation(0).unwrap().top(), Some(sa));
    assert!(table.lane(3).unwrap().is_empty());
}

#[test]
fn test_double_click_ignores_buried_card() {
    let mut table = blank();
    let ha = card(&table, Suit::Hearts, 1);
    let ck = card(&table, Suit::Clubs, 13);
    arrange(&mut table, 3, &[(ck, true), (ha, true)]);
    // Above the ace's top edge only the king is hit.
    let at = Vec2::new(950.0, 210.0);
    assert_eq!(table.hit_test(at), Some(BodyId::Card(ck)));

    for _ in 0..2 {
        table.update(&FrameInput::new(FRAME, at, PointerButton::press()));
        table.update(&FrameInput::new(FRAME, at, PointerButton::release()));
    }
    settle(&mut table);

    assert_eq!(lane_cards(&table, 3), vec![ck, ha]);
    assert!(table.foundations().iter().all(|f| f.is_empty()));
}

#[test]
fn test_face_down_card_cannot_be_grabbed() {
    let mut table = blank();
    let c3 = card(&table, Suit::Clubs, 3);
    let h8 = card(&table, Suit::Hearts, 8);
    arrange(&mut table, 0, &[(c3, false), (h8, true)]);

    table.update(&FrameInput::new(FRAME, Vec2::new(530.0, 210.0), PointerButton::press()));
    assert!(table.held().is_empty());
}

#[test]
fn test_moving_card_cannot_be_grabbed() {
    let mut table = blank();
    let h8 = card(&table, Suit::Hearts, 8);
    table.place_in_lane(0, h8, true).unwrap();
    // The card is still sliding from the pile.
    assert!(!table.card(h8).unwrap().can_grab());

    // The card starts its slide at the pile anchor.
    table.update(&FrameInput::new(0.0, Vec2::new(530.0, 40.0), PointerButton::press()));
    assert!(table.held().is_empty());
}

// =============================================================================
// Sequenced set-down
// =============================================================================

/// Lay out a two-card run in lane 1 and drop it on the nine in lane 0,
/// leaving the seven still waiting for its set-down step.
fn drop_run_on_nine(table: &mut Table) -> (CardId, CardId, CardId, CardId) {
    let s9 = card(table, Suit::Spades, 9);
    let h8 = card(table, Suit::Hearts, 8);
    let c7 = card(table, Suit::Clubs, 7);
    let h10 = card(table, Suit::Hearts, 10);
    arrange(table, 0, &[(s9, true)]);
    arrange(table, 1, &[(h8, true), (c7, true)]);
    arrange(table, 2, &[(h10, true)]);

    table.update(&FrameInput::new(FRAME, Vec2::new(700.0, 220.0), PointerButton::press()));
    assert_eq!(table.held(), &[h8, c7]);
    table.update(&FrameInput::new(FRAME, Vec2::new(570.0, 235.0), PointerButton::hold()));
    table.update(&FrameInput::new(FRAME, Vec2::new(570.0, 235.0), PointerButton::release()));
    (s9, h8, c7, h10)
}

/// Test that a card under a run that is still landing cannot be grabbed,
/// so the late card always reaches its stack.
#[test]
fn test_regrab_under_landing_run_is_refused() {
    let mut table = blank();
    let (s9, h8, c7, h10) = drop_run_on_nine(&mut table);
    assert_eq!(lane_cards(&table, 0), vec![s9, h8]);
    assert_eq!(table.card(c7).unwrap().owner, None);

    table.update(&FrameInput::new(FRAME, Vec2::new(530.0, 205.0), PointerButton::press()));
    assert!(table.held().is_empty());
    for _ in 0..10 {
        table.update(&FrameInput::new(FRAME, Vec2::new(830.0, 210.0), PointerButton::hold()));
    }
    table.update(&FrameInput::new(FRAME, Vec2::new(830.0, 210.0), PointerButton::release()));
    settle(&mut table);

    assert_eq!(lane_cards(&table, 0), vec![s9, h8, c7]);
    assert_eq!(lane_cards(&table, 2), vec![h10]);
    assert_eq!(table.card(c7).unwrap().owner, Some(StackId::Lane(0)));
    assert_eq!(table.card(c7).unwrap().position, Vec2::new(520.0, 290.0));
    assert_ownership_consistent(&table);
}

/// Test that a card between stacks can be neither grabbed nor transferred.
#[test]
fn test_card_awaiting_set_down_stays_out_of_reach() {
    let mut table = blank();
    let (s9, h8, c7, _) = drop_run_on_nine(&mut table);

    // The seven still hangs where it was released, above everything else.
    let at = table.card(c7).unwrap().position + Vec2::new(10.0, 100.0);
    assert_eq!(table.hit_test(at), Some(BodyId::Card(c7)));
    table.update(&FrameInput::new(0.0, at, PointerButton::press()));
    assert!(table.held().is_empty());
    assert_eq!(table.transfer(c7, StackId::Lane(4)), Err(TableError::Unowned(c7)));

    table.update(&FrameInput::new(FRAME, at, PointerButton::release()));
    settle(&mut table);
    assert_eq!(lane_cards(&table, 0), vec![s9, h8, c7]);
    assert_ownership_consistent(&table);
}

/// Test that a transfer carries the run above the card and flips the new top.
#[test]
fn test_transfer_moves_run_between_lanes() {
    let mut table = blank();
    let c3 = card(&table, Suit::Clubs, 3);
    let h8 = card(&table, Suit::Hearts, 8);
    let c7 = card(&table, Suit::Clubs, 7);
    arrange(&mut table, 0, &[(c3, false), (h8, true), (c7, true)]);

    assert_eq!(
        table.transfer(h8, StackId::Lane(9)),
        Err(TableError::UnknownStack(StackId::Lane(9)))
    );
    assert_eq!(lane_cards(&table, 0), vec![c3, h8, c7]);

    table.transfer(h8, StackId::Lane(4)).unwrap();
    settle(&mut table);

    assert_eq!(lane_cards(&table, 4), vec![h8, c7]);
    assert_eq!(table.card(c7).unwrap().position, Vec2::new(1040.0, 245.0));
    assert_eq!(lane_cards(&table, 0), vec![c3]);
    assert!(table.card(c3).unwrap().is_face_up());
    assert_ownership_consistent(&table);
}

//! Picture Gallery game integration tests.
//!
//! These tests drive whole games through the public API and check that the
//! board stays consistent with the stacking rules at every step.

use picture_gallery::board::{Board, BoardView, Move};
use picture_gallery::core::{Card, Rank, Suit};
use picture_gallery::games::picture_gallery::{PictureGallery, PictureGalleryBuilder, Variant};
use picture_gallery::games::GameRegistry;
use picture_gallery::rules::{GameResult, SolitaireRules};
use picture_gallery::stacks::{is_any_but_own_sequence, StackKind};
use proptest::prelude::*;

/// Check every stack against the rules that built it.
fn assert_board_consistent(game: &PictureGallery) {
    let board: &Board = game.board();
    let config = game.config();

    assert_eq!(board.card_count(), config.card_count(), "cards lost or duplicated");

    for stack in board.stacks() {
        match stack.kind() {
            StackKind::Foundation { capacity } => {
                assert!(stack.len() <= capacity);
                assert!(stack.cards().iter().all(|c| c.is_ace()));
            }
            StackKind::Tableau { base_rank } => {
                assert!(stack.len() <= config.tableau_max_cards);
                // Only the dealt card may break the sequence; anything
                // built on top requires the right base.
                if stack.len() > 1 {
                    assert_eq!(stack.cards()[0].rank, base_rank);
                    assert!(is_any_but_own_sequence(stack.cards(), config.tableau_dir));
                }
            }
            StackKind::Row | StackKind::Talon | StackKind::Waste => {}
        }
    }
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_every_variant_deals() {
    for variant in Variant::ALL {
        let game = PictureGalleryBuilder::new().variant(variant).build(42).unwrap();
        let board = game.board();
        let dealt = board.tableaux().len() + board.rows().len();

        assert_eq!(board.rows().len(), variant.row_stacks());
        assert_eq!(board.tableaux().len(), 12 * variant.decks());
        assert_eq!(board.stack(board.talon()).len(), 52 * variant.decks() - dealt);
        assert_board_consistent(&game);
    }
}

#[test]
fn test_registry_matches_variants() {
    let registry = GameRegistry::builtin();
    for info in registry.iter() {
        let game = registry.build(info.id, 9).unwrap();
        assert_eq!(game.config().decks, info.decks);
        assert_eq!(game.board().rows().len(), info.variant.row_stacks());
    }
}

#[test]
fn test_waste_variant_layout() {
    let game = PictureGalleryBuilder::new().waste().build(1).unwrap();
    let waste = game.board().waste().unwrap();
    assert!(game.board().dropstacks().contains(&waste));
    assert!(game.board().stack(waste).is_empty());
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_manual_moves_follow_hints() {
    let mut game = PictureGalleryBuilder::new()
        .variant(Variant::Standard)
        .build(77)
        .unwrap();

    for _ in 0..200 {
        let Some(hint) = game.hints(2).first().copied() else {
            break;
        };
        game.apply_hint(&hint).unwrap();
        assert_board_consistent(&game);
    }
}

#[test]
fn test_dealing_until_talon_empty() {
    let mut game = PictureGalleryBuilder::new()
        .variant(Variant::Small)
        .build(5)
        .unwrap();

    let mut deals = 0;
    while game.can_deal() {
        game.deal().unwrap();
        deals += 1;
    }

    // 36 cards left after the opening, four rows per deal
    assert_eq!(deals, 9);
    assert!(game.deal().is_err());
    assert_board_consistent(&game);
}

#[test]
fn test_illegal_moves_rejected() {
    let mut game = PictureGalleryBuilder::new().build(3).unwrap();
    let board = game.board().clone();
    let talon = board.talon();
    let row = board.rows()[0];

    // Nothing leaves the talon by hand, nothing lands on it
    assert!(game.apply_move(&Move::single(talon, row)).is_err());
    assert!(game.apply_move(&Move::single(row, talon)).is_err());
    // Rows are closed while the talon still deals
    assert!(game.apply_move(&Move::single(board.rows()[1], row)).is_err());

    assert_eq!(game.board(), &board);
}

#[test]
fn test_won_position_from_snapshot() {
    let config = Variant::Small.config();
    let mut board = Board::new(&config);

    let foundation = board.foundations()[0];
    let aces: Vec<_> = Suit::ALL.iter().map(|&s| Card::new(Rank::ACE, s)).collect();
    board.arrange(foundation, &aces);

    let suits = [Suit::Clubs, Suit::Hearts];
    for t in board.tableaux().to_vec() {
        let base = board.stack(t).kind().base_rank().unwrap();
        let run: Vec<_> = (0..4u8)
            .map(|k| Card::new(Rank::new(base.value() + 3 * k), suits[usize::from(k % 2)]))
            .collect();
        board.arrange(t, &run);
    }

    let game = PictureGallery::with_board(config, board).unwrap();
    assert!(game.is_won());
    assert_eq!(game.is_terminal(), Some(GameResult::Won));
    assert!(game.hints(3).is_empty());
}

#[test]
fn test_one_move_from_win() {
    let config = Variant::Small.config();
    let mut board = Board::new(&config);

    let foundation = board.foundations()[0];
    let row = board.rows()[0];
    let ace = |s| Card::new(Rank::ACE, s);
    board.arrange(foundation, &[ace(Suit::Clubs), ace(Suit::Spades), ace(Suit::Hearts)]);
    board.arrange(row, &[ace(Suit::Diamonds)]);

    let suits = [Suit::Spades, Suit::Diamonds];
    for t in board.tableaux().to_vec() {
        let base = board.stack(t).kind().base_rank().unwrap();
        let run: Vec<_> = (0..4u8)
            .map(|k| Card::new(Rank::new(base.value() + 3 * k), suits[usize::from(k % 2)]))
            .collect();
        board.arrange(t, &run);
    }

    let mut game = PictureGallery::with_board(config, board).unwrap();
    assert!(!game.is_won());

    let steps = game.auto_play(0, 10).unwrap();
    assert_eq!(steps, 1);
    assert!(game.is_won());
    assert!(game.board().foundation().is_closed());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_auto_play_keeps_board_consistent(seed in any::<u64>(), steps in 1usize..200) {
        let mut game = PictureGalleryBuilder::new()
            .variant(Variant::Small)
            .build(seed)
            .unwrap();
        game.auto_play(2, steps).unwrap();
        assert_board_consistent(&game);
    }

    #[test]
    fn prop_same_seed_same_game(seed in any::<u64>()) {
        let mut a = PictureGalleryBuilder::new().variant(Variant::Small).build(seed).unwrap();
        let mut b = PictureGalleryBuilder::new().variant(Variant::Small).build(seed).unwrap();
        a.auto_play(2, 50).unwrap();
        b.auto_play(2, 50).unwrap();
        prop_assert_eq!(a.board(), b.board());
    }
}

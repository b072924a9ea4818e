//! Klondike gameplay integration tests.
//!
//! These tests drive the engine through its public surface:
//! - The initial deal
//! - Draw and recycle
//! - Placement rules on foundations and tableau
//! - Scoring and foundation building
//! - Win detection and replay

use rustc_hash::FxHashSet;

use klondike_engine::{
    Action, Board, BoardLayout, Card, EngineConfig, GameResult, Klondike, MoveError, PileRef,
    Rank, RulesEngine, ScoringPolicy, Suit, FOUNDATION_SUITS,
};

fn up(s: &str) -> Card {
    s.parse::<Card>().unwrap().flipped_up()
}

fn down(s: &str) -> Card {
    s.parse().unwrap()
}

fn game(layout: BoardLayout) -> Klondike {
    Klondike::from_board(EngineConfig::default(), layout.build().unwrap())
}

fn full_suit(suit: Suit) -> Vec<Card> {
    Rank::ALL.iter().map(|&r| Card::face_up(suit, r)).collect()
}

// =============================================================================
// Deal
// =============================================================================

/// Test the shape of a fresh deal.
#[test]
fn test_deal_invariant() {
    for seed in [0, 1, 42, 9999] {
        let game = Klondike::builder().seed(seed).build();
        let board = game.board();

        for i in 0..7 {
            let column = board.tableau(i);
            assert_eq!(column.len(), i + 1);
            let face_up: Vec<_> = column.cards().map(|c| c.face_up).collect();
            let mut expected = vec![false; i];
            expected.push(true);
            assert_eq!(face_up, expected);
        }

        assert_eq!(board.stock_len(), 24);
        assert!(board.stock().cards().all(|c| !c.face_up));
        assert!(board.waste().is_empty());
        assert!(board.foundations().iter().all(|f| f.is_empty()));
        assert_eq!(board.card_count(), 52);

        let unique: FxHashSet<_> = board.all_cards().map(|c| c.identity()).collect();
        assert_eq!(unique.len(), 52);
    }
}

/// Test that new games in one session get different deals.
#[test]
fn test_new_game_deals_fresh_board() {
    let mut game = Klondike::builder().seed(5).build();
    let first = game.board().clone();

    game.new_game();
    let second = game.board().clone();
    game.new_game();

    assert_ne!(first, second);
    assert_ne!(&second, game.board());
    assert_eq!(game.board().card_count(), 52);
}

// =============================================================================
// Draw
// =============================================================================

/// Test drawing moves the stock top to the waste, face-up.
#[test]
fn test_draw_from_stock() {
    let mut game = Klondike::builder().seed(11).build();
    let top = game.board().stock().top().unwrap();

    assert!(game.draw_from_stock());
    assert_eq!(game.board().stock_len(), 23);
    assert_eq!(game.board().waste_top(), Some(top.flipped_up()));
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.score(), 0);
}

/// Test the empty-stock recycle reverses the waste, face-down.
#[test]
fn test_empty_stock_recycle() {
    let mut layout = BoardLayout::new();
    layout.waste = vec![up("4C"), up("9D"), up("JH")];
    let mut game = game(layout);

    assert!(game.draw_from_stock());

    let stock = game.board().stock().to_vec();
    assert_eq!(stock, vec![down("JH"), down("9D"), down("4C")]);
    assert!(game.board().waste().is_empty());
    // Recycles are not moves by default, but they are undoable.
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.history_len(), 1);

    // The next draw hands back the first card drawn originally.
    assert!(game.draw_from_stock());
    assert_eq!(game.board().waste_top(), Some(up("4C")));
}

/// Test recycles count as moves when configured.
#[test]
fn test_recycle_counting_policy() {
    let mut layout = BoardLayout::new();
    layout.waste = vec![up("4C")];
    let board = layout.build().unwrap();
    let mut game = Klondike::from_board(EngineConfig::new().counting_recycles(), board);

    assert!(game.draw_from_stock());
    assert_eq!(game.move_count(), 1);
}

/// Test drawing with nothing left fails without a snapshot.
#[test]
fn test_draw_with_nothing_left() {
    let mut layout = BoardLayout::new();
    layout.tableau[0] = vec![up("KS")];
    let mut game = game(layout);

    assert_eq!(game.try_draw(), Err(MoveError::NothingToDraw));
    assert!(!game.draw_from_stock());
    assert_eq!(game.history_len(), 0);
    assert_eq!(game.actions().count(), 0);
}

// =============================================================================
// Placement rules
// =============================================================================

/// Test Aces go only to the foundation assigned to their suit.
#[test]
fn test_ace_to_empty_foundation() {
    let mut layout = BoardLayout::new();
    layout.waste = vec![up("AD")];
    let mut game = game(layout);

    let diamonds = FOUNDATION_SUITS.iter().position(|&s| s == Suit::Diamonds).unwrap();
    for index in (0..4).filter(|&i| i != diamonds) {
        assert!(!game.attempt_move(PileRef::Waste, PileRef::foundation(index)));
    }
    assert!(game.attempt_move(PileRef::Waste, PileRef::foundation(diamonds)));
    assert_eq!(game.board().foundation(diamonds).top(), Some(up("AD")));
}

/// Test any King, and only a King, may fill an empty column.
#[test]
fn test_king_to_empty_tableau() {
    let mut layout = BoardLayout::new();
    layout.tableau[0] = vec![up("KH")];
    layout.tableau[1] = vec![up("QS")];
    let mut game = game(layout);

    assert_eq!(
        game.try_move(PileRef::tableau(1), PileRef::tableau(5)),
        Err(MoveError::RuleViolation)
    );
    assert!(game.attempt_move(PileRef::tableau(0), PileRef::tableau(5)));
    assert!(game.board().tableau(0).is_empty());
    assert_eq!(game.board().tableau(5).top(), Some(up("KH")));
}

/// Test moving a run between columns and revealing the card beneath.
#[test]
fn test_run_move_reveals_card() {
    let mut layout = BoardLayout::new();
    layout.tableau[2] = vec![down("2S"), up("8D"), up("7C"), up("6H")];
    layout.tableau[4] = vec![up("9S")];
    let mut game = game(layout);

    let outcome = game
        .try_move(PileRef::tableau_run(2, 1), PileRef::tableau(4))
        .unwrap();

    assert_eq!(outcome.cards.len(), 3);
    assert_eq!(outcome.revealed, Some(up("2S")));
    assert_eq!(game.board().tableau(2).to_vec(), vec![up("2S")]);
    assert_eq!(
        game.board().tableau(4).to_vec(),
        vec![up("9S"), up("8D"), up("7C"), up("6H")]
    );
    assert_eq!(game.score(), 5);
}

/// Test a run can never start on a hidden card or go to a foundation.
#[test]
fn test_run_restrictions() {
    let mut layout = BoardLayout::new();
    layout.tableau[0] = vec![down("KD"), up("AS")];
    layout.tableau[1] = vec![up("3H"), up("2C")];
    let mut game = game(layout);

    assert_eq!(
        game.try_move(PileRef::tableau_run(0, 0), PileRef::tableau(3)),
        Err(MoveError::FaceDownCard)
    );
    assert_eq!(
        game.try_move(PileRef::tableau_run(1, 0), PileRef::foundation(3)),
        Err(MoveError::RunToFoundation)
    );
    assert_eq!(
        game.try_move(PileRef::tableau_run(1, 5), PileRef::tableau(3)),
        Err(MoveError::IndexOutOfRange)
    );
    // The single top card is fine.
    assert!(game.attempt_move(PileRef::tableau(0), PileRef::foundation(3)));
}

/// Test illegal moves leave the board byte-for-byte unchanged.
#[test]
fn test_move_rejection_changes_nothing() {
    let mut game = Klondike::builder().seed(77).build();
    let before = game.state().snapshot();

    let attempts = [
        (PileRef::Stock, PileRef::tableau(0)),
        (PileRef::Waste, PileRef::tableau(0)),
        (PileRef::tableau_run(6, 0), PileRef::tableau(0)),
        (PileRef::tableau(0), PileRef::Waste),
        (PileRef::tableau(0), PileRef::tableau(0)),
        (PileRef::foundation(0), PileRef::tableau(1)),
        (PileRef::tableau(9), PileRef::tableau(1)),
    ];
    for (from, to) in attempts {
        assert!(!game.attempt_move(from, to), "{from} -> {to} should fail");
    }

    assert_eq!(game.state().snapshot(), before);
    assert_eq!(game.history_len(), 0);
}

// =============================================================================
// Auto-move
// =============================================================================

/// Test double-click sends the top card to its foundation.
#[test]
fn test_auto_move_from_tableau() {
    let mut layout = BoardLayout::new();
    layout.foundations[0] = vec![up("AC")];
    layout.tableau[3] = vec![down("9H"), up("2C")];
    let mut game = game(layout);

    assert!(game.auto_move_to_foundation(PileRef::tableau_run(3, 1)));
    assert_eq!(game.board().foundation(0).len(), 2);
    assert_eq!(game.board().tableau(3).top(), Some(up("9H")));
    // +10 for the foundation, +5 for the flip.
    assert_eq!(game.score(), 15);
}

/// Test double-click only works on genuine top cards.
#[test]
fn test_auto_move_rejections() {
    let mut layout = BoardLayout::new();
    layout.tableau[0] = vec![up("AH")];
    layout.tableau[1] = vec![up("3S"), up("2H")];
    let mut game = game(layout);

    assert_eq!(
        game.try_auto_move(PileRef::tableau_run(1, 0)),
        Err(MoveError::NotTopCard)
    );
    assert_eq!(game.try_auto_move(PileRef::Waste), Err(MoveError::EmptySource));
    assert_eq!(game.try_auto_move(PileRef::Stock), Err(MoveError::IllegalSource));
    assert_eq!(game.try_auto_move(PileRef::tableau(1)), Err(MoveError::RuleViolation));
    assert!(game.auto_move_to_foundation(PileRef::tableau(0)));
    assert!(game.auto_move_to_foundation(PileRef::tableau(1)));
}

// =============================================================================
// Scoring
// =============================================================================

/// Test each row of the scoring table.
#[test]
fn test_scoring_table() {
    let mut layout = BoardLayout::new();
    layout.waste = vec![up("AS"), up("QD")];
    layout.tableau[0] = vec![up("KC")];
    layout.tableau[1] = vec![down("9C"), up("4D")];
    layout.tableau[2] = vec![up("5S")];
    layout.foundations[2] = vec![up("AD"), up("2D"), up("3D")];
    let mut game = game(layout);

    // Waste to tableau: +5.
    assert!(game.attempt_move(PileRef::Waste, PileRef::tableau(0)));
    assert_eq!(game.score(), 5);

    // Waste to foundation: +10.
    assert!(game.attempt_move(PileRef::Waste, PileRef::foundation(3)));
    assert_eq!(game.score(), 15);

    // Tableau to foundation with a flip: +10 +5.
    assert!(game.attempt_move(PileRef::tableau(1), PileRef::foundation(2)));
    assert_eq!(game.score(), 30);
    assert_eq!(game.board().tableau(1).top(), Some(up("9C")));

    // Foundation back to tableau: -15.
    assert!(game.attempt_move(PileRef::foundation(2), PileRef::tableau(2)));
    assert_eq!(game.score(), 15);
    assert_eq!(game.board().tableau(2).to_vec(), vec![up("5S"), up("4D")]);
    assert_eq!(game.move_count(), 4);
}

/// Test the score never drops below zero.
#[test]
fn test_score_floor() {
    let mut layout = BoardLayout::new();
    layout.foundations[1] = vec![up("AH"), up("2H")];
    layout.tableau[0] = vec![up("3S")];
    let mut game = game(layout);

    assert!(game.attempt_move(PileRef::foundation(1), PileRef::tableau(0)));
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().tableau(0).to_vec(), vec![up("3S"), up("2H")]);
    assert_eq!(game.board().foundation(1).to_vec(), vec![up("AH")]);
}

/// Test scoring can be switched off.
#[test]
fn test_scoring_disabled() {
    let mut layout = BoardLayout::new();
    layout.waste = vec![up("AC")];
    let board = layout.build().unwrap();
    let config = EngineConfig::new().with_scoring(ScoringPolicy::disabled());
    let mut game = Klondike::from_board(config, board);

    assert!(game.attempt_move(PileRef::Waste, PileRef::foundation(0)));
    assert_eq!(game.score(), 0);
    assert_eq!(game.move_count(), 1);
}

// =============================================================================
// Foundations
// =============================================================================

/// Test one foundation built from Ace to King through the move surface.
#[test]
fn test_foundation_built_ace_to_king() {
    let mut layout = BoardLayout::new();
    layout.waste = ["KH", "QH", "JH", "TH", "9H", "8H", "7H", "6H", "5H", "4H"]
        .iter()
        .map(|s| up(s))
        .collect();
    layout.tableau[0] = vec![down("5C"), up("3H")];
    layout.tableau[1] = vec![up("2H")];
    layout.tableau[2] = vec![up("AH")];
    let mut game = game(layout);

    // Nothing but the Ace can start the foundation.
    assert_eq!(
        game.try_move(PileRef::Waste, PileRef::foundation(1)),
        Err(MoveError::RuleViolation)
    );
    assert_eq!(
        game.try_move(PileRef::tableau(1), PileRef::foundation(1)),
        Err(MoveError::RuleViolation)
    );

    assert!(game.auto_move_to_foundation(PileRef::tableau(2)));
    assert!(game.attempt_move(PileRef::tableau(1), PileRef::foundation(1)));
    assert!(game.auto_move_to_foundation(PileRef::tableau(0)));
    assert_eq!(game.board().tableau(0).top(), Some(up("5C")));

    for n in 3..13 {
        let placed = if n % 2 == 0 {
            game.attempt_move(PileRef::Waste, PileRef::foundation(1))
        } else {
            game.auto_move_to_foundation(PileRef::Waste)
        };
        assert!(placed);
        assert_eq!(game.board().foundation(1).len(), n + 1);
        assert_eq!(game.board().foundation(1).top().map(|c| c.rank), Some(Rank::ALL[n]));
    }

    assert_eq!(game.board().foundation(1).to_vec(), full_suit(Suit::Hearts));
    assert!(game.board().waste().is_empty());
    assert_eq!(game.score(), 13 * 10 + 5);
    assert_eq!(game.move_count(), 13);
}

// =============================================================================
// Win detection
// =============================================================================

/// Test 3 full foundations plus 12 cards is not a win; the last card is.
#[test]
fn test_win_detection() {
    let mut layout = BoardLayout::new();
    for (i, &suit) in FOUNDATION_SUITS.iter().enumerate() {
        layout.foundations[i] = full_suit(suit);
    }
    let king = layout.foundations[3].pop().unwrap();
    layout.tableau[0] = vec![king];
    let mut game = game(layout);

    assert_eq!(game.board().card_count(), 52);
    assert!(!game.check_win());
    assert_eq!(game.is_terminal(), None);

    assert!(game.auto_move_to_foundation(PileRef::tableau(0)));
    assert!(game.check_win());
    assert_eq!(
        game.is_terminal(),
        Some(GameResult::Won { score: 10, moves: 1 })
    );
}

/// Test a fresh board is never won.
#[test]
fn test_empty_board_not_won() {
    assert!(!Klondike::from_board(EngineConfig::default(), Board::default()).check_win());
}

// =============================================================================
// Replay
// =============================================================================

/// Draw, then push cards to foundations and waste cards onto the tableau.
fn play_simple_strategy(game: &mut Klondike) {
    for _ in 0..30 {
        game.draw_from_stock();
        for column in 0..7 {
            game.auto_move_to_foundation(PileRef::tableau(column));
            if game.attempt_move(PileRef::Waste, PileRef::tableau(column)) {
                break;
            }
        }
        game.auto_move_to_foundation(PileRef::Waste);
    }
}

/// Test replaying the action log reproduces the game.
#[test]
fn test_replay_from_log() {
    let seed = 2024;
    let mut game = Klondike::builder().seed(seed).build();
    play_simple_strategy(&mut game);

    let log: Vec<Action> = game.actions().map(|r| r.action).collect();
    assert!(!log.is_empty());

    let replayed = Klondike::builder().seed(seed).replay(&log).unwrap();
    assert_eq!(replayed.board(), game.board());
    assert_eq!(replayed.score(), game.score());
    assert_eq!(replayed.move_count(), game.move_count());
}

/// Test a later game of a session replays from its saved RNG state.
#[test]
fn test_replay_later_game_from_rng_state() {
    let mut session = Klondike::builder().seed(5).build();
    let first_deal = session.board().clone();
    session.new_game();

    let state = session.rng_state();
    let dealt = session.board().clone();
    assert_ne!(dealt, first_deal);
    play_simple_strategy(&mut session);

    let log: Vec<Action> = session.actions().map(|r| r.action).collect();
    assert!(!log.is_empty());

    // The seed alone only reproduces the first deal.
    let from_seed = Klondike::builder().seed(5).build();
    assert_eq!(from_seed.board(), &first_deal);

    let restored = Klondike::builder().rng_state(state.clone()).build();
    assert_eq!(restored.board(), &dealt);

    let replayed = Klondike::builder().rng_state(state).replay(&log).unwrap();
    assert_eq!(replayed.board(), session.board());
    assert_eq!(replayed.score(), session.score());
    assert_eq!(replayed.move_count(), session.move_count());
}

/// Test replay reports the first rejected action.
#[test]
fn test_replay_reports_failure() {
    let actions = [
        Action::Draw,
        Action::Move {
            from: PileRef::Stock,
            to: PileRef::tableau(0),
        },
    ];
    let err = Klondike::builder().seed(1).replay(&actions).unwrap_err();
    assert_eq!(err, (1, MoveError::IllegalSource));
}

//! Property-based tests for the game engine using proptest.

use proptest::prelude::*;
use strictly_boxes::invariants::{InvariantSet, TicTacToeInvariants};
use strictly_boxes::{Board, GameEngine, GameStatus, Phase, Player, Square, rules};

// Move requests, including out-of-range ones on both sides.
fn move_requests() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-3i64..12, 0..30)
}

proptest! {
    #[test]
    fn test_rejected_moves_change_nothing(moves in move_requests()) {
        let mut engine = GameEngine::new();
        for index in moves {
            let before = engine.clone();
            if engine.try_move(index).is_err() {
                prop_assert_eq!(&engine, &before);
            }
            let mut again = before.clone();
            let status = again.apply_move(index);
            prop_assert_eq!(status, engine.status());
            prop_assert_eq!(&again, &engine);
            engine = again;
        }
    }

    #[test]
    fn test_turn_alternates_while_running(moves in move_requests()) {
        let mut engine = GameEngine::new();
        for index in moves {
            if engine.try_move(index).is_ok() && !engine.is_over() {
                let n = engine.history().len();
                let expected = if n % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(engine.turn(), expected);
            }
        }
    }

    #[test]
    fn test_invariants_hold_for_any_play(moves in move_requests()) {
        let engine = GameEngine::replay(moves);
        prop_assert!(TicTacToeInvariants::check_all(&engine).is_ok());
        prop_assert_eq!(engine.board().occupied(), engine.history().len());
        prop_assert_eq!(engine.status(), rules::evaluate(engine.board()));
    }

    #[test]
    fn test_terminal_status_recorded_once(moves in move_requests()) {
        let mut engine = GameEngine::new();
        let mut terminal_transitions = 0;
        for index in moves {
            let was_over = engine.is_over();
            engine.apply_move(index);
            if !was_over && engine.is_over() {
                terminal_transitions += 1;
            }
        }
        prop_assert!(terminal_transitions <= 1);
        prop_assert_eq!(terminal_transitions == 1, engine.phase().is_terminal());
    }

    #[test]
    fn test_reset_is_idempotent(moves in move_requests(), resets in 1usize..5) {
        let mut engine = GameEngine::replay(moves);
        for _ in 0..resets {
            engine.reset();
        }
        prop_assert_eq!(&engine, &GameEngine::new());
        prop_assert_eq!(engine.phase(), Phase::Fresh);
        prop_assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_tie_only_on_full_board_without_line(
        marks in prop::array::uniform9(prop_oneof![
            Just(Square::Empty),
            Just(Square::Occupied(Player::X)),
            Just(Square::Occupied(Player::O)),
        ])
    ) {
        let board = Board::from_squares(marks);
        let status = rules::evaluate(&board);
        let full = marks.iter().all(|s| *s != Square::Empty);
        match status {
            GameStatus::Tied => {
                prop_assert!(full);
                prop_assert!(rules::check_winner(&board).is_none());
            }
            GameStatus::Won { winner, line } => {
                for pos in line.positions() {
                    prop_assert_eq!(board.get(pos), Square::Occupied(winner));
                }
            }
            GameStatus::InProgress => {
                prop_assert!(!full);
                prop_assert!(rules::check_winner(&board).is_none());
            }
        }
    }
}

//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Player, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board, with markers alternating
/// from X, must never hit an occupied square and must reproduce the current
/// board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for (n, pos) in engine.history().iter().enumerate() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(Player::for_move_number(n)));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

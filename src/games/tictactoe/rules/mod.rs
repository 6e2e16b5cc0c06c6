//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine
//! so they can be checked on any board, including ones the engine never
//! produced.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board.
///
/// A completed line wins (first match in [`WIN_LINES`] order), otherwise a
/// full board is a tie, otherwise the game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        return GameStatus::Won { winner, line };
    }
    if is_full(board) {
        return GameStatus::Tied;
    }
    GameStatus::InProgress
}

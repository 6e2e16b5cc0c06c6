//! Reasons a move request is ignored.

use super::Position;
use serde::{Deserialize, Serialize};

/// Why the engine ignored a move request.
///
/// Rejections never change engine state. [`GameEngine::apply_move`]
/// swallows them; [`GameEngine::try_move`] reports them.
///
/// [`GameEngine::apply_move`]: super::GameEngine::apply_move
/// [`GameEngine::try_move`]: super::GameEngine::try_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The game already ended in a win or tie.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell (0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(i64),

    /// The targeted cell already holds a marker.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveRejection {}

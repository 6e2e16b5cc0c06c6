//! Serializable view of an engine for rendering.

use super::engine::{GameEngine, Phase};
use super::{GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Render state for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// What the cell holds.
    pub square: Square,
    /// The cell no longer accepts clicks (filled, or the game is over).
    pub disabled: bool,
    /// The cell is part of the winning line.
    pub winning: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in board order.
    pub cells: Vec<CellView>,
    /// Player to move (or the final mover once the game is over).
    pub turn: Player,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Game status.
    pub status: GameStatus,
    /// Status line text.
    pub status_text: String,
    /// Winning line indices, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Show the celebration (wins only, never ties).
    pub celebrate: bool,
}

impl From<&GameEngine> for Snapshot {
    fn from(engine: &GameEngine) -> Self {
        let status = engine.status();
        let line = status.line();
        let over = engine.is_over();

        let cells = Position::ALL
            .iter()
            .map(|&position| {
                let square = engine.board().get(position);
                CellView {
                    position,
                    square,
                    disabled: over || square != Square::Empty,
                    winning: line.is_some_and(|l| l.contains(position)),
                }
            })
            .collect();

        Self {
            cells,
            turn: engine.turn(),
            phase: engine.phase(),
            status,
            status_text: engine.status_text(),
            winning_line: line.map(|l| l.indices()),
            celebrate: status.winner().is_some(),
        }
    }
}

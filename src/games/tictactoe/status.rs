//! Game status and winning lines.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Positions making up the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices making up the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// Player holding the line.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Every square is filled and nobody holds a line.
    Tied,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Status line shown to the player.
    ///
    /// `to_move` is only consulted while the game is in progress.
    pub fn message(&self, to_move: Player) -> String {
        match self {
            GameStatus::InProgress => format!("Turn: {}", to_move),
            GameStatus::Won {
                winner: Player::X, ..
            } => "You won!".to_string(),
            GameStatus::Won {
                winner: Player::O, ..
            } => "O won!".to_string(),
            GameStatus::Tied => "Tie game".to_string(),
        }
    }
}

//! Game engine for tic-tac-toe.
//!
//! The engine is an owned value: each game gets its own instance, and the
//! only ways to change it are [`GameEngine::reset`] and the move methods.
//! Invalid move requests are ignored rather than surfaced as errors, so a
//! front end can forward every click without checking it first.

use super::action::MoveRejection;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::snapshot::Snapshot;
use super::{Board, GameStatus, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// No move has been made since the last reset.
    Fresh,
    /// At least one move made, no result yet.
    InProgress,
    /// A player completed a line.
    Won,
    /// The board filled without a line.
    Tied,
}

impl Phase {
    /// Whether moves are rejected in this phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Tied)
    }
}

/// Tic-tac-toe game engine.
///
/// Deserializing replays the recorded history and rejects any state the
/// move methods could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineState", into = "EngineState")]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Position>,
}

/// Serialized form of [`GameEngine`].
#[derive(Serialize, Deserialize)]
struct EngineState {
    board: Board,
    turn: Player,
    status: GameStatus,
    history: Vec<Position>,
}

/// A serialized engine state that no sequence of moves produces.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_new::new)]
#[display("Unreachable engine state: {}", reason)]
pub struct EngineStateError {
    /// Which part of the state disagrees with the history.
    pub reason: String,
}

impl From<GameEngine> for EngineState {
    fn from(engine: GameEngine) -> Self {
        Self {
            board: engine.board,
            turn: engine.turn,
            status: engine.status,
            history: engine.history,
        }
    }
}

impl TryFrom<EngineState> for GameEngine {
    type Error = EngineStateError;

    fn try_from(state: EngineState) -> Result<Self, Self::Error> {
        let replayed = GameEngine::replay(state.history.iter().map(|p| p.to_index() as i64));

        if replayed.history != state.history {
            return Err(EngineStateError::new(format!(
                "history has {} moves but only {} are playable",
                state.history.len(),
                replayed.history.len()
            )));
        }
        if replayed.board != state.board {
            return Err(EngineStateError::new("board does not match history".to_string()));
        }
        if replayed.status != state.status {
            return Err(EngineStateError::new("status does not match board".to_string()));
        }
        if replayed.turn != state.turn {
            return Err(EngineStateError::new(format!(
                "turn {} does not match history",
                state.turn
            )));
        }

        Ok(replayed)
    }
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays `moves` in order on a fresh game.
    ///
    /// Invalid entries are ignored exactly as [`GameEngine::apply_move`]
    /// ignores them.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = i64>) -> Self {
        let mut engine = Self::new();
        for index in moves {
            engine.apply_move(index);
        }
        engine
    }

    /// Returns the engine to a fresh game.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Plays the current player's marker at a raw board index.
    ///
    /// Requests after the game ended, outside 0-8, or on an occupied cell
    /// are ignored. Always returns the status after the call.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, index: i64) -> GameStatus {
        let result = self.try_move(index);
        self.settle(result)
    }

    /// Plays the current player's marker at `position`.
    ///
    /// Same ignore rules as [`GameEngine::apply_move`].
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn place(&mut self, position: Position) -> GameStatus {
        let result = self.try_place(position);
        self.settle(result)
    }

    /// Like [`GameEngine::apply_move`], but reports why a request was ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] when the move is not accepted. The engine
    /// is unchanged in that case.
    pub fn try_move(&mut self, index: i64) -> Result<GameStatus, MoveRejection> {
        if self.is_over() {
            return Err(MoveRejection::GameOver);
        }
        let position = Position::from_signed(index).ok_or(MoveRejection::OutOfBounds(index))?;
        self.try_place(position)
    }

    /// Like [`GameEngine::place`], but reports why a request was ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::GameOver`] or [`MoveRejection::CellOccupied`].
    pub fn try_place(&mut self, position: Position) -> Result<GameStatus, MoveRejection> {
        if self.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveRejection::CellOccupied(position));
        }

        let player = self.turn;
        self.board.set(position, Square::Occupied(player));
        self.history.push(position);

        let status = rules::evaluate(&self.board);
        self.status = status;
        match status {
            GameStatus::InProgress => {
                self.turn = player.opponent();
                info!(%player, %position, next = %self.turn, "Move accepted");
            }
            GameStatus::Won { winner, line } => {
                info!(%player, %position, %winner, line = ?line.indices(), "Game won");
            }
            GameStatus::Tied => {
                info!(%player, %position, "Game tied");
            }
        }

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Engine invariants violated after move at {}",
            position
        );

        Ok(status)
    }

    fn settle(&self, result: Result<GameStatus, MoveRejection>) -> GameStatus {
        match result {
            Ok(status) => status,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.status
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Positions played since the last reset, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.status {
            GameStatus::Won { .. } => Phase::Won,
            GameStatus::Tied => Phase::Tied,
            GameStatus::InProgress if self.history.is_empty() => Phase::Fresh,
            GameStatus::InProgress => Phase::InProgress,
        }
    }

    /// Status line for the current state (`Turn: X`, `You won!`, ...).
    pub fn status_text(&self) -> String {
        self.status.message(self.turn)
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

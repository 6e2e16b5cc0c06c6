//! Tic-tac-toe game logic.

mod action;
mod engine;
mod position;
mod snapshot;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::MoveRejection;
pub use engine::{EngineStateError, GameEngine, Phase};
pub use position::Position;
pub use snapshot::{CellView, Snapshot};
pub use status::{GameStatus, WinLine};
pub use types::{Board, Player, Square};

//! Strictly Boxes - a tic-tac-toe engine with a terminal front end
//!
//! The engine is a plain owned value with no global state: build one per
//! game, forward every move request to it, and render what it reports.
//! Invalid requests are ignored rather than raised.
//!
//! # Architecture
//!
//! - **Engine**: board, turn and outcome; applies moves and evaluates lines
//! - **Rules**: the eight winning lines and pure board evaluation
//! - **Invariants**: properties asserted after every accepted move
//! - **Replay**: headless rendering of a move list
//! - **TUI**: terminal presentation layer driving the engine
//!
//! # Example
//!
//! ```
//! use strictly_boxes::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5] {
//!     engine.apply_move(index);
//! }
//! let status = engine.apply_move(2);
//! assert_eq!(status.winner(), Some(Player::X));
//! assert_eq!(engine.status_text(), "You won!");
//!
//! // Moves after the game ends change nothing.
//! assert_eq!(engine.apply_move(3), status);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod logging;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, DisplayConfig, LogConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellView, EngineStateError, GameEngine, GameStatus, MoveRejection, Phase, Player,
    Position, Snapshot, Square, WinLine, invariants, rules,
};

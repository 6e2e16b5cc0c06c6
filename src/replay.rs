//! Headless replay of a move list.

use crate::GameEngine;
use tracing::{info, instrument};

/// How [`replay`] renders the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// Board grid, a blank line, then the status line.
    #[default]
    Text,
    /// Pretty-printed [`Snapshot`](crate::Snapshot) JSON.
    Json,
}

/// Plays `moves` on a fresh game and renders the result.
///
/// Invalid entries are ignored exactly as [`GameEngine::apply_move`]
/// ignores them.
///
/// # Errors
///
/// Returns an error if the snapshot fails to serialize.
#[instrument(skip(moves))]
pub fn replay(
    moves: impl IntoIterator<Item = i64>,
    format: ReplayFormat,
) -> serde_json::Result<String> {
    let engine = GameEngine::replay(moves);
    info!(phase = %engine.phase(), moves = engine.history().len(), "Replay finished");

    match format {
        ReplayFormat::Text => Ok(format!("{}\n\n{}", engine.board(), engine.status_text())),
        ReplayFormat::Json => serde_json::to_string_pretty(&engine.snapshot()),
    }
}

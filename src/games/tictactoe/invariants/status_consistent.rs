//! Status consistency invariant: the recorded status matches the board.

use super::super::{GameEngine, rules};
use super::Invariant;

/// Invariant: The recorded status is what the rules say about the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.status() == rules::evaluate(engine.board())
    }

    fn description() -> &'static str {
        "Recorded status matches board evaluation"
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// After `n` accepted moves in a running game, X is to move when `n` is
/// even and O when it is odd. Once the game is over, the turn stays with
/// whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let played = engine.history().len();

        if engine.is_over() {
            return played > 0 && engine.turn() == Player::for_move_number(played - 1);
        }

        engine.turn() == Player::for_move_number(played)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2, 6, 8] {
            engine.apply_move(index);
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        assert!(engine.is_over());
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);
        engine.turn = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}

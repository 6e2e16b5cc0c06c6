//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, WinLine};
use tracing::instrument;

/// The eight winning lines, checked in this order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line in [`WIN_LINES`] order,
/// or `None` if no line is held by a single player.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WIN_LINES {
            let board = board_with(Player::O, &line.positions());
            assert_eq!(check_winner(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column are both complete; the row comes first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board), Some((Player::X, WIN_LINES[0])));
    }
}

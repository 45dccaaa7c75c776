//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_of(marks: [Player; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = board_of([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        use Player::{O, X};
        // Alternating fill completes the 0-4-8 diagonal.
        let board = board_of([X, O, X, O, X, O, X, O, X]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

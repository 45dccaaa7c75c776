//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Positions on the line, in canonical order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on the line, in canonical order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Whether this is one of the eight canonical lines.
    pub fn is_canonical(&self) -> bool {
        LINES.contains(self)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// The eight winning lines, in the order they are checked.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three squares.
    pub player: Player,
    /// The completed line.
    pub line: WinningLine,
}

/// Checks if there is a winner on the board.
///
/// Returns the first uniformly occupied line in [`LINES`] order, or
/// `None` when no line is complete. Several complete lines can only come
/// from a hand-built board; the scan order decides which one is reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = line
                .positions()
                .into_iter()
                .fold(Board::new(), |b, pos| b.with_mark(pos, Player::O));
            let win = check_winner(&board).unwrap();
            assert_eq!(win.player, Player::O);
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_tie() {
        // Top row and left column both complete for X.
        let board = [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]
        .into_iter()
        .fold(Board::new(), |b, pos| b.with_mark(pos, Player::X));
        assert_eq!(check_winner(&board).unwrap().line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_canonical_lines() {
        assert!(LINES.iter().all(WinningLine::is_canonical));
        let bogus = WinningLine([Position::TopLeft, Position::TopCenter, Position::Center]);
        assert!(!bogus.is_canonical());
        assert_eq!(LINES[6].to_string(), "0-4-8");
    }
}

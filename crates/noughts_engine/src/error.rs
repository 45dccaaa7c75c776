//! Rejected commands.

use super::Position;

/// Why a command was rejected.
///
/// A rejected command never changes the game state, so callers can
/// simply try again with different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The automated player was asked to move out of turn.
    #[display("It is not the automated player's turn")]
    NotAutomatedTurn,

    /// No empty square is left to choose from.
    #[display("No empty squares left")]
    NoEmptySquares,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Position 9 is out of bounds (must be 0-8)"
        );
        assert!(
            MoveError::SquareOccupied(Position::Center)
                .to_string()
                .contains("occupied")
        );
    }
}

//! The engine's single mutable aggregate.

use super::rules::{Win, WinningLine, check_winner, is_full};
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of placing a mark on an in-progress board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// No line and empty squares remain; the turn passes.
    Continue,
    /// The move completed a line.
    Won(Win),
    /// The move filled the board without completing a line.
    Drawn,
}

impl Transition {
    /// Classifies a board right after a mark was placed.
    #[instrument]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(win) = check_winner(board) {
            Transition::Won(win)
        } else if is_full(board) {
            Transition::Drawn
        } else {
            Transition::Continue
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winner: Option<Player>,
    winning_line: Option<WinningLine>,
    automated_player: Player,
}

impl GameState {
    /// Creates a fresh game with an empty board.
    pub fn new(starting_player: Player, automated_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::InProgress,
            winner: None,
            winning_line: None,
            automated_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns the automated player's mark.
    pub fn automated_player(&self) -> Player {
        self.automated_player
    }

    /// Places the current player's mark and applies the resulting transition.
    ///
    /// Writing the mark, ending the game and passing the turn happen
    /// together here so no caller can observe one without the others.
    /// The caller has already checked that the game is in progress and
    /// the square is empty.
    pub(crate) fn place(&mut self, pos: Position) -> Transition {
        self.board.set(pos, Square::Occupied(self.current_player));

        let transition = Transition::evaluate(&self.board);
        match transition {
            Transition::Won(win) => {
                self.status = GameStatus::Won;
                self.winner = Some(win.player);
                self.winning_line = Some(win.line);
            }
            Transition::Drawn => {
                self.status = GameStatus::Drawn;
            }
            Transition::Continue => {
                self.current_player = self.current_player.opponent();
            }
        }
        transition
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_passes_turn() {
        let mut state = GameState::new(Player::X, Player::O);
        assert_eq!(state.place(Position::Center), Transition::Continue);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_winning_place_keeps_player() {
        let mut state = GameState::new(Player::X, Player::O);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            state.place(pos);
        }
        let transition = state.place(Position::TopRight);
        let Transition::Won(win) = transition else {
            panic!("expected a win, got {:?}", transition);
        };
        assert_eq!(win.player, Player::X);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }
}

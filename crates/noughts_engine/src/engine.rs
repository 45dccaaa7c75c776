//! The stateful game engine.

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::WinningLine;
use super::selector::select_move;
use super::state::{GameState, Transition};
use super::{Board, GameStatus, Move, MoveError, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument, warn};

/// Tic-tac-toe against an automated opponent.
///
/// The engine owns the only copy of the game state. Presentation code
/// drives it with [`apply_move`](Self::apply_move),
/// [`apply_automated_move`](Self::apply_automated_move) and
/// [`reset`](Self::reset), and reads it back through the query methods,
/// all of which hand out copies.
///
/// Randomness (starting player and the automated player's fallback move)
/// comes from the injected generator `R`.
///
/// The engine is single-threaded. If it is shared, hold one lock across
/// a human move and the automated reply so readers never see the board
/// between the two.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates a game with `O` as the automated player, seeded from the OS.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(Player::O, StdRng::from_os_rng())
    }

    /// Creates a game with `O` as the automated player and a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Player::O, StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates a game with the given automated player and random source.
    ///
    /// The automated player is fixed for the lifetime of the engine.
    #[instrument(skip(rng))]
    pub fn with_rng(automated_player: Player, mut rng: R) -> Self {
        let state = Self::fresh_state(automated_player, &mut rng);
        Self { state, rng }
    }

    fn fresh_state(automated_player: Player, rng: &mut R) -> GameState {
        let starting = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        info!(starting = %starting, automated = %automated_player, "New game");
        GameState::new(starting, automated_player)
    }

    /// Discards the current game and starts a new one.
    ///
    /// The starting player is drawn again; the automated player is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = Self::fresh_state(self.state.automated_player(), &mut self.rng);
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move without touching the state when the index is off
    /// the board, the game is over, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = match Position::from_index(index) {
            Some(pos) => pos,
            None => {
                warn!(index, "Rejected move: out of bounds");
                return Err(MoveError::OutOfBounds(index));
            }
        };

        if self.state.status().is_over() {
            warn!(position = %pos, "Rejected move: game is over");
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            warn!(position = %pos, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let played = Move::new(self.state.current_player(), pos);
        match self.state.place(pos) {
            Transition::Won(win) => {
                info!(winner = %win.player, line = %win.line, "Game won");
            }
            Transition::Drawn => info!("Game drawn"),
            Transition::Continue => {}
        }

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "invariants violated after {}: {:?}",
            played,
            GameInvariants::check_all(&self.state)
        );

        Ok(played)
    }

    /// Lets the automated player take its turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotAutomatedTurn`] unless the game is in
    /// progress and the automated player is to move.
    #[instrument(skip(self))]
    pub fn apply_automated_move(&mut self) -> Result<Move, MoveError> {
        if !self.is_automated_turn() {
            return Err(MoveError::NotAutomatedTurn);
        }

        let board = self.state.board();
        let pos = select_move(&board, self.state.automated_player(), &mut self.rng)
            .ok_or(MoveError::NoEmptySquares)?;
        self.apply_move(pos.to_index())
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.state.board()
    }

    /// Player to move. Meaningless once the game is over.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Winner, when the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Completed line, when the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    /// The automated player's mark.
    pub fn automated_player(&self) -> Player {
        self.state.automated_player()
    }

    /// True while the game is in progress and the automated player is to move.
    pub fn is_automated_turn(&self) -> bool {
        self.state.status() == GameStatus::InProgress
            && self.state.current_player() == self.state.automated_player()
    }

    /// Copy of the whole game state.
    pub fn snapshot(&self) -> GameState {
        self.state
    }
}

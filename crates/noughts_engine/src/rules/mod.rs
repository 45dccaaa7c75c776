//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! engine so the automated player can evaluate hypothetical boards with
//! exactly the logic the engine uses to end the game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, WinningLine, check_winner};

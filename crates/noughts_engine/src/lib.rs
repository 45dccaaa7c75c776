//! Noughts engine - tic-tac-toe against a one-ply automated opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **Selector**: the automated player's win / block / random heuristic
//! - **Engine**: the stateful game owning the board, turn and outcome
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::seeded(7);
//! if engine.is_automated_turn() {
//!     engine.apply_automated_move().unwrap();
//! }
//! let human = engine.board().empty_positions()[0];
//! engine.apply_move(human.to_index()).unwrap();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod selector;
mod state;
mod types;

pub use action::Move;
pub use engine::GameEngine;
pub use error::MoveError;
pub use position::Position;
pub use rules::{Win, WinningLine, check_winner, is_draw, is_full};
pub use selector::{find_winning_move, select_move};
pub use state::{GameState, Transition};
pub use types::{Board, GameStatus, Player, Square};

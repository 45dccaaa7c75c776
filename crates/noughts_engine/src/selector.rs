//! Move selection for the automated player.
//!
//! The opponent is deliberately human-like rather than perfect. It looks
//! exactly one ply ahead, in this order:
//!
//! 1. take a square that wins immediately
//! 2. otherwise take the square the opponent would win on next
//! 3. otherwise pick any empty square uniformly at random
//!
//! Ties in the first two tiers go to the lowest index.

use super::rules::check_winner;
use super::{Board, Player, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// First empty position (ascending index) where `player` completes a line.
#[instrument]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Position> {
    board.empty_positions().into_iter().find(|&pos| {
        let win = check_winner(&board.with_mark(pos, player));
        win.is_some_and(|win| win.player == player)
    })
}

/// Chooses the automated player's next square.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    automated: Player,
    rng: &mut R,
) -> Option<Position> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("No empty squares to choose from");
        return None;
    }

    if let Some(pos) = find_winning_move(board, automated) {
        debug!(position = %pos, "Taking winning move");
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(board, automated.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    let pos = empty.choose(rng).copied();
    debug!(position = ?pos, candidates = empty.len(), "Choosing at random");
    pos
}

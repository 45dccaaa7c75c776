//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every accepted
//! command. The engine checks them in debug builds; tests can check them
//! directly.

use super::rules::is_draw;
use super::{GameState, GameStatus, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Winner and winning line are present exactly when the game is won.
pub struct StatusConsistent;

impl Invariant<GameState> for StatusConsistent {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Won => state.winner().is_some() && state.winning_line().is_some(),
            GameStatus::Drawn | GameStatus::InProgress => {
                state.winner().is_none() && state.winning_line().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Winner and winning line are set exactly when the game is won"
    }
}

/// A reported winning line is canonical and fully held by the winner.
pub struct WinningLineHeld;

impl Invariant<GameState> for WinningLineHeld {
    fn holds(state: &GameState) -> bool {
        match (state.winner(), state.winning_line()) {
            (Some(winner), Some(line)) => {
                line.is_canonical()
                    && line
                        .positions()
                        .iter()
                        .all(|&pos| state.board().get(pos) == Square::Occupied(winner))
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Winning line is canonical and every square on it holds the winner's mark"
    }
}

/// A drawn game has a full board and no completed line.
pub struct DrawMeansFull;

impl Invariant<GameState> for DrawMeansFull {
    fn holds(state: &GameState) -> bool {
        state.status() != GameStatus::Drawn || is_draw(&state.board())
    }

    fn description() -> &'static str {
        "A drawn game has a full board and no completed line"
    }
}

/// Mark counts differ by at most one, as strict alternation guarantees.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let count = |player: Player| {
            state
                .board()
                .squares()
                .iter()
                .filter(|&&s| s == Square::Occupied(player))
                .count()
        };
        count(Player::X).abs_diff(count(Player::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    StatusConsistent,
    WinningLineHeld,
    DrawMeansFull,
    BalancedMarks,
);

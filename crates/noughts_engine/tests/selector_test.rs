//! Tests for the automated player's move selection.

use noughts_engine::{Board, Player, Position, select_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn board_with(marks: &[(usize, Player)]) -> Board {
    marks.iter().fold(Board::new(), |b, &(i, p)| {
        b.with_mark(Position::from_index(i).unwrap(), p)
    })
}

#[test]
fn test_blocks_two_in_a_row() {
    let board = board_with(&[(0, Player::X), (1, Player::X)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board, Player::O, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_block_ignores_rng() {
    let board = board_with(&[(2, Player::X), (4, Player::X), (0, Player::O)]);
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            select_move(&board, Player::O, &mut rng),
            Some(Position::BottomLeft)
        );
    }
}

#[test]
fn test_win_preferred_over_block() {
    // O can win down the middle column at 7; X threatens 6.
    let board = board_with(&[
        (1, Player::O),
        (4, Player::O),
        (0, Player::X),
        (3, Player::X),
        (8, Player::X),
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board, Player::O, &mut rng),
        Some(Position::BottomCenter)
    );
}

#[test]
fn test_lowest_block_chosen_when_two_threats() {
    // X threatens 2 (top row) and 6 (left column).
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (3, Player::X),
        (4, Player::O),
        (8, Player::O),
    ]);
    // 4-8 diagonal needs 0, which X holds, so O has no win.
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board, Player::O, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_automated_x_uses_same_rules() {
    let board = board_with(&[(6, Player::O), (7, Player::O), (0, Player::X)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board, Player::X, &mut rng),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_random_tier_spreads_over_empty_squares() {
    let board = Board::new();
    let chosen: HashSet<Position> = (0..200)
        .filter_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_move(&board, Player::O, &mut rng)
        })
        .collect();
    assert_eq!(chosen.len(), 9);
}

#[test]
fn test_random_tier_is_reproducible() {
    let board = board_with(&[(4, Player::X)]);
    let pick = |seed| select_move(&board, Player::O, &mut StdRng::seed_from_u64(seed));
    assert_eq!(pick(42), pick(42));
}

//! Command-line interface for noughts.

use clap::Parser;
use noughts_engine::Player;
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against a human-like computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (e.g. noughts.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark played by the computer (x or o)
    #[arg(short, long)]
    pub automated: Option<Player>,

    /// Seed for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print each finished game as JSON
    #[arg(long)]
    pub json: bool,
}

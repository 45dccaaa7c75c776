//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{AppConfig, Session};
use noughts_engine::GameEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.automated, cli.seed);

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let engine = GameEngine::with_rng(*config.automated(), rng);
    info!(automated = %engine.automated_player(), "Starting session");

    let mut session = Session::new(engine, *config.show_indices(), cli.json);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

//! Terminal host for the tic-tac-toe engine.
//!
//! Reads moves from stdin, prints the board to stdout, logs to stderr.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::HostConfig;
use tictactoe_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HostConfig::resolve(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(show_scoreboard = config.show_scoreboard(), "Starting tic-tac-toe");

    let mut engine = GameEngine::new();
    let stdin = std::io::stdin();
    session::run_session(
        &mut engine,
        stdin.lock(),
        std::io::stdout().lock(),
        *config.show_scoreboard(),
    )?;

    info!(
        circle_wins = engine.state().circle_wins(),
        cross_wins = engine.state().cross_wins(),
        draws = engine.state().draws(),
        "Session over"
    );
    Ok(())
}

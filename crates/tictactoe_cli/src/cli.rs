//! Command-line interface for the tic-tac-toe host.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Hide the win/draw tally after each move
    #[arg(long)]
    pub no_scoreboard: bool,
}

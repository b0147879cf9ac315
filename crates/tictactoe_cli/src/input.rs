//! Translates typed lines into engine actions.

use tictactoe_engine::{EngineError, Position, UserAction};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the engine.
    Action(UserAction),
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Parses a line of input. Blank lines yield `None`.
///
/// Anything that is not a known word must be a cell number; out-of-range
/// numbers are rejected here, before they reach the engine.
pub fn parse_command(line: &str) -> Option<Result<Command, EngineError>> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }

    let command = match word.to_lowercase().as_str() {
        "r" | "reset" | "again" => Ok(Command::Action(UserAction::ResetRequested)),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "h" | "help" | "?" => Ok(Command::Help),
        _ => word
            .parse::<Position>()
            .map(|pos| Command::Action(UserAction::CellTapped(pos))),
    };
    Some(command)
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  1-9           place your mark in that cell
  r, again      start a new round (scores are kept)
  h, help       show this help
  q, quit       leave the game";

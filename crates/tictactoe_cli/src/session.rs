//! Line-oriented play loop.

use crate::input::{Command, HELP, parse_command};
use crate::render::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, Transition};
use tracing::{debug, info, instrument, warn};

/// Runs one play session until `quit` or end of input.
///
/// Every changed snapshot is rendered to `output`; rejected input gets a
/// one-line explanation and the loop continues.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
    show_scoreboard: bool,
) -> Result<()> {
    writeln!(output, "{}", render(engine.board(), engine.state(), show_scoreboard))?;
    writeln!(output, "Type a cell number (1-9), or 'h' for help.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                warn!(input = %line.trim(), error = %e, "Rejected input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                info!(rounds = engine.state().rounds_played(), "Player quit");
                break;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Action(action) => {
                let transition = engine.dispatch(action);
                debug!(?transition, "Dispatched");
                match transition {
                    Transition::Ignored(reason) => writeln!(output, "Ignored: {}", reason)?,
                    _ => writeln!(
                        output,
                        "{}",
                        render(engine.board(), engine.state(), show_scoreboard)
                    )?,
                }
                if transition.ends_round() {
                    writeln!(output, "Type 'r' to play again.")?;
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}

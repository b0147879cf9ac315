//! Plain-text rendering of engine snapshots.

use tictactoe_engine::{Board, GameState};

/// Renders the board, the status message and optionally the tally.
pub fn render(board: &Board, state: &GameState, show_scoreboard: bool) -> String {
    let mut out = format!("\n{}\n\n{}", board, state.message());

    if let Some(cells) = state.victory_line().positions() {
        let cells: Vec<String> = cells.iter().map(|p| p.to_string()).collect();
        out.push_str(&format!(" (cells {})", cells.join("-")));
    }

    if show_scoreboard {
        out.push('\n');
        out.push_str(&scoreboard(state));
    }
    out
}

/// One-line tally: `O: 1  X: 0  Draws: 2`.
pub fn scoreboard(state: &GameState) -> String {
    format!(
        "O: {}  X: {}  Draws: {}",
        state.circle_wins(),
        state.cross_wins(),
        state.draws()
    )
}

//! Draw detection logic for tic-tac-toe.

use super::win::winners;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw: every cell filled and nobody holds a line.
///
/// The engine only asks [`Board::is_full`] after it has ruled out a win for
/// the mover, so a last move that both fills the board and completes a line
/// is a win. This function answers the question for an arbitrary board.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winners(board).is_empty()
}

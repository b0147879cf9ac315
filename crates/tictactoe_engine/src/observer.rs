//! Observer hook for hosts that want to react to new snapshots.

use crate::state::GameState;
use crate::types::Board;

/// Receives every new snapshot the engine produces.
///
/// Called once per state-changing dispatch, after the board and state have
/// both been replaced. Ignored taps produce no callback.
pub trait StateObserver {
    /// Handles the snapshot produced by the latest dispatch.
    fn on_state(&mut self, state: &GameState, board: &Board);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState, &Board),
{
    fn on_state(&mut self, state: &GameState, board: &Board) {
        self(state, board)
    }
}

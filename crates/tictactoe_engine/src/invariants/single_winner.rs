//! Single winner invariant: at most one symbol ever holds a complete line.

use super::{Invariant, Snapshot};
use crate::rules::winners;

/// Invariant: no board has winning lines for both symbols.
pub struct SingleWinnerInvariant;

impl Invariant<Snapshot<'_>> for SingleWinnerInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        winners(snapshot.board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one symbol holds a winning line"
    }
}

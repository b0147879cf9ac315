//! Boundary errors for the rules engine.
//!
//! The engine itself never fails once it holds validated input. These errors
//! can only arise while turning raw host input into a [`Position`](crate::Position).

use derive_more::{Display, Error};

/// Error raised when host input cannot be turned into a valid move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A cell number outside 1-9.
    #[display("Invalid cell {value}: cells are numbered 1-9")]
    InvalidPosition {
        /// The rejected cell number.
        value: u32,
    },

    /// Text that is not a cell number at all.
    #[display("Cannot read {input:?} as a cell number")]
    Parse {
        /// The rejected input.
        input: String,
    },
}

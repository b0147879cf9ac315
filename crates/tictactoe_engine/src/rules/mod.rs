//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes them
//! after each placement; they hold no state of their own.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_victory, winners};

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]. Rules are kept apart from the
//! engine so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_win;

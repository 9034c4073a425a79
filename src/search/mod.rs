//! Move selection.
//!
//! Walks the move tree with the board's reversible apply/revert primitive
//! to pick the best move for the side to move.

pub mod negamax;

pub use negamax::{search, SearchResult};

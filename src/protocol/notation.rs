//! Move notation for the wire.
//!
//! A step move is written `x1,y1>x2,y2` (origin, then destination); a pass
//! is the literal `pass`. This is the form the `bestmove` response carries
//! and the form self-play records store.

use crate::board::Move;

/// Formats a move for the `bestmove` response.
pub fn format_move(mv: &Move) -> String {
    match mv.step_squares() {
        None => "pass".to_string(),
        Some((from, to)) => format!("{},{}>{},{}", from.x, from.y, to.x, to.y),
    }
}

//! Legal move generation.
//!
//! Generates the step moves available to a player: one move per
//! (active colony, adjacent empty square) pair, in fixed grid scan order.
//! The order is deliberate and load-bearing: search explores siblings in
//! generation order and breaks score ties toward the earlier move, so
//! reordering changes both pruning and the move chosen.

use rand::Rng;

use crate::board::{Board, Cell, Move, Player, Square};

/// Generates every legal step move for `player`.
///
/// Colonies are scanned in x-outer/y-inner grid order and destinations in
/// the same order around each colony. No strength ordering is applied.
pub fn legal_moves(player: Player, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    for x in 0..board.width() {
        for y in 0..board.height() {
            if board.cell(x, y) == Cell::Active(player) {
                let from = Square::new(x, y);
                for to in board.adjacent_squares(x, y, Cell::Empty) {
                    moves.push(Move::step(board, player, from, to));
                }
            }
        }
    }

    moves
}

/// Returns true if `player` has at least one legal step move.
///
/// Equivalent to `!legal_moves(player, board).is_empty()` without
/// constructing the moves.
pub fn has_legal_move(player: Player, board: &Board) -> bool {
    for x in 0..board.width() {
        for y in 0..board.height() {
            if board.cell(x, y) == Cell::Active(player)
                && !board.adjacent_squares(x, y, Cell::Empty).is_empty()
            {
                return true;
            }
        }
    }
    false
}

/// Picks a uniformly random legal move for `player`, or `None` if the
/// player has none. Used for self-play opening variety.
pub fn random_move(player: Player, board: &Board, rng: &mut impl Rng) -> Option<Move> {
    let mut moves = legal_moves(player, board);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(moves.swap_remove(idx))
}

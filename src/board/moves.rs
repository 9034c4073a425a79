//! Moves and the square changes that make them reversible.
//!
//! A step move records every square it touches as an old/new contents pair,
//! so the board can apply and later revert it without copying itself. The
//! construction preconditions are debug assertions: `legal_moves` only ever
//! constructs moves that satisfy them, so a violation is a generator bug.

use std::fmt;

use super::cell::{Cell, Player};
use super::grid::Board;

/// Coordinates of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Square { x, y }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A single reversible edit to one square: its coordinates plus the
/// contents before and after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareChange {
    pub square: Square,
    pub old: Cell,
    pub new: Cell,
}

impl SquareChange {
    pub const fn new(square: Square, old: Cell, new: Cell) -> Self {
        SquareChange { square, old, new }
    }
}

/// A move: either a pass (no board effect) or a one-square step of an
/// active colony, carrying the full ordered list of square changes it
/// causes (captures, origin downgrade, destination occupation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Pass,
    Step {
        from: Square,
        to: Square,
        changes: Vec<SquareChange>,
    },
}

impl Move {
    /// Builds the step move of `player`'s active colony from `from` to the
    /// adjacent empty square `to`.
    ///
    /// Every opposing colony adjacent to the destination flips to the
    /// mover's ownership, keeping its active/passive kind. The origin
    /// downgrades to a passive colony and the destination becomes the
    /// mover's active colony.
    pub fn step(board: &Board, player: Player, from: Square, to: Square) -> Move {
        let opp = player.opponent();

        debug_assert!(board.in_bounds(to.x, to.y), "step: destination {} off board", to);
        debug_assert_eq!(
            board.cell(from.x, from.y),
            Cell::Active(player),
            "step: origin {} does not hold the mover's active colony",
            from,
        );
        debug_assert!(
            (from.x - to.x).abs() <= 1
                && (from.y - to.y).abs() <= 1
                && (from.x - to.x).abs() + (from.y - to.y).abs() > 0,
            "step: {} -> {} is not a one-square move",
            from,
            to,
        );
        debug_assert_eq!(
            board.cell(to.x, to.y),
            Cell::Empty,
            "step: destination {} is not empty",
            to,
        );

        let mut changes = Vec::new();

        // Flip opposing colonies adjacent to the destination. The ring scan
        // covers the destination square itself, but it is empty and never
        // matches.
        for x in to.x - 1..=to.x + 1 {
            for y in to.y - 1..=to.y + 1 {
                if !board.in_bounds(x, y) {
                    continue;
                }
                let square = Square::new(x, y);
                if board.cell(x, y) == Cell::Active(opp) {
                    changes.push(SquareChange::new(square, Cell::Active(opp), Cell::Active(player)));
                }
                if board.cell(x, y) == Cell::Passive(opp) {
                    changes.push(SquareChange::new(square, Cell::Passive(opp), Cell::Passive(player)));
                }
            }
        }

        changes.push(SquareChange::new(from, Cell::Active(player), Cell::Passive(player)));
        changes.push(SquareChange::new(to, Cell::Empty, Cell::Active(player)));

        Move::Step { from, to, changes }
    }

    /// The ordered square changes this move applies. Empty for a pass.
    pub fn changes(&self) -> &[SquareChange] {
        match self {
            Move::Pass => &[],
            Move::Step { changes, .. } => changes,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// The origin and destination of a step move, or `None` for a pass.
    pub fn step_squares(&self) -> Option<(Square, Square)> {
        match self {
            Move::Pass => None,
            Move::Step { from, to, .. } => Some((*from, *to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_has_no_changes() {
        let mv = Move::Pass;
        assert!(mv.is_pass());
        assert!(mv.changes().is_empty());
        assert_eq!(mv.step_squares(), None);
    }

    #[test]
    fn step_without_captures_has_two_changes() {
        let mut board = Board::new(5, 5);
        board.set(2, 2, Cell::Active(Player::One));

        let mv = Move::step(&board, Player::One, Square::new(2, 2), Square::new(3, 2));
        let changes = mv.changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[0],
            SquareChange::new(
                Square::new(2, 2),
                Cell::Active(Player::One),
                Cell::Passive(Player::One)
            )
        );
        assert_eq!(
            changes[1],
            SquareChange::new(Square::new(3, 2), Cell::Empty, Cell::Active(Player::One))
        );
    }

    #[test]
    fn step_captures_adjacent_enemy_colonies() {
        // Player 1 active at (2,2), player 2 active at (3,3). Stepping to
        // (3,2) puts the enemy colony in the arrival ring: it flips.
        let mut board = Board::new(5, 5);
        board.set(2, 2, Cell::Active(Player::One));
        board.set(3, 3, Cell::Active(Player::Two));

        let mv = Move::step(&board, Player::One, Square::new(2, 2), Square::new(3, 2));
        let changes = mv.changes();
        assert_eq!(changes.len(), 3);
        assert!(changes.contains(&SquareChange::new(
            Square::new(3, 3),
            Cell::Active(Player::Two),
            Cell::Active(Player::One)
        )));
        // Origin downgrade and destination occupation are the final two
        // changes, in that order.
        assert_eq!(
            changes[changes.len() - 2],
            SquareChange::new(
                Square::new(2, 2),
                Cell::Active(Player::One),
                Cell::Passive(Player::One)
            )
        );
        assert_eq!(
            changes[changes.len() - 1],
            SquareChange::new(Square::new(3, 2), Cell::Empty, Cell::Active(Player::One))
        );
    }

    #[test]
    fn step_flips_passive_colonies_keeping_kind() {
        let mut board = Board::new(5, 5);
        board.set(1, 1, Cell::Active(Player::Two));
        board.set(2, 3, Cell::Passive(Player::One));
        board.set(3, 2, Cell::Active(Player::One));

        let mv = Move::step(&board, Player::Two, Square::new(1, 1), Square::new(2, 2));
        let changes = mv.changes();
        assert!(changes.contains(&SquareChange::new(
            Square::new(2, 3),
            Cell::Passive(Player::One),
            Cell::Passive(Player::Two)
        )));
        assert!(changes.contains(&SquareChange::new(
            Square::new(3, 2),
            Cell::Active(Player::One),
            Cell::Active(Player::Two)
        )));
    }

    #[test]
    fn step_ignores_own_colonies_and_walls_in_ring() {
        let mut board = Board::new(5, 5);
        board.set(2, 2, Cell::Active(Player::One));
        board.set(3, 3, Cell::Passive(Player::One));
        board.set(4, 2, Cell::Impassable);

        let mv = Move::step(&board, Player::One, Square::new(2, 2), Square::new(3, 2));
        // No captures: only the origin and destination change.
        assert_eq!(mv.changes().len(), 2);
    }

    #[test]
    fn diagonal_step_is_one_square() {
        let mut board = Board::new(4, 4);
        board.set(1, 1, Cell::Active(Player::Two));
        let mv = Move::step(&board, Player::Two, Square::new(1, 1), Square::new(2, 2));
        assert_eq!(mv.step_squares(), Some((Square::new(1, 1), Square::new(2, 2))));
    }
}

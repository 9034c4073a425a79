//! Heuristic position evaluation.
//!
//! Scores a board from one player's perspective as a weighted sum of
//! material, mobility, and fortress features. Both scoring functions are
//! exactly antisymmetric between the two players: every term is computed
//! the same way for each side and subtracted.

use crate::board::{Board, Cell, Player};

/// Weight of an active colony: mobile and capture-capable, the most
/// valuable unit on the board.
pub const ACTIVE_WEIGHT: f64 = 100.0;

/// Weight of a passive colony: immobile, worth little on its own.
pub const PASSIVE_WEIGHT: f64 = 1.0;

/// Weight per free square adjacent to an active colony.
pub const MOBILITY_WEIGHT: f64 = 10.0;

/// Weight of a fully packed 3x3 passive block. Deliberately outweighs any
/// other positional consideration: a completed block cannot be dislodged.
pub const BLOCK_WEIGHT: f64 = 10_000.0;

/// Terminal score per colony of advantage. Scaled so that a decided game
/// outranks any heuristic estimate of a sparse position, and bigger wins
/// (or smaller losses) always rank higher.
pub const TERMINAL_SCALE: f64 = 1001.0;

/// How the mobility term aggregates free squares across a player's active
/// colonies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilityPolicy {
    /// Sum the adjacent-empty counts of every active colony. A free square
    /// adjacent to several colonies is counted once per colony.
    SumOverColonies,
    /// Count only the free squares of the last active colony in grid scan
    /// order, ignoring the rest.
    LastColonyOnly,
}

/// The policy compiled into `estimate`.
pub const MOBILITY_POLICY: MobilityPolicy = MobilityPolicy::SumOverColonies;

/// Counts `player`'s free squares under the given aggregation policy.
pub fn mobility_with_policy(player: Player, board: &Board, policy: MobilityPolicy) -> i32 {
    let mut total = 0;
    for x in 0..board.width() {
        for y in 0..board.height() {
            if board.cell(x, y) == Cell::Active(player) {
                let free = board.adjacent_squares(x, y, Cell::Empty).len() as i32;
                match policy {
                    MobilityPolicy::SumOverColonies => total += free,
                    MobilityPolicy::LastColonyOnly => total = free,
                }
            }
        }
    }
    total
}

/// Counts `player`'s free squares under the compiled-in policy.
pub fn mobility(player: Player, board: &Board) -> i32 {
    mobility_with_policy(player, board, MOBILITY_POLICY)
}

/// Estimates the game result from `player`'s perspective for a
/// non-terminal position. Positive means `player` is ahead.
pub fn estimate(player: Player, board: &Board) -> f64 {
    let opp = player.opponent();

    f64::from(board.count(Cell::Active(player))) * ACTIVE_WEIGHT
        + f64::from(board.count(Cell::Passive(player))) * PASSIVE_WEIGHT
        - f64::from(board.count(Cell::Active(opp))) * ACTIVE_WEIGHT
        - f64::from(board.count(Cell::Passive(opp))) * PASSIVE_WEIGHT
        + f64::from(mobility(player, board)) * MOBILITY_WEIGHT
        - f64::from(mobility(opp, board)) * MOBILITY_WEIGHT
        + f64::from(board.blocks_3x3(Cell::Passive(player))) * BLOCK_WEIGHT
        - f64::from(board.blocks_3x3(Cell::Passive(opp))) * BLOCK_WEIGHT
}

/// Exact score of a finished game from `player`'s perspective.
///
/// Only meaningful when neither player has a legal move; it counts
/// colonies on the board as they stand.
pub fn terminal_score(player: Player, board: &Board) -> f64 {
    TERMINAL_SCALE * f64::from(board.advantage(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new(5, 5);
        assert_eq!(estimate(Player::One, &board), 0.0);
        assert_eq!(terminal_score(Player::One, &board), 0.0);
    }

    #[test]
    fn estimate_is_antisymmetric() {
        let mut board = Board::new(5, 5);
        board.set(0, 0, Cell::Active(Player::One));
        board.set(1, 0, Cell::Passive(Player::One));
        board.set(4, 4, Cell::Active(Player::Two));
        board.set(2, 2, Cell::Impassable);

        assert_eq!(estimate(Player::One, &board), -estimate(Player::Two, &board));
        assert_eq!(
            terminal_score(Player::One, &board),
            -terminal_score(Player::Two, &board)
        );
    }

    #[test]
    fn estimate_single_colony_each() {
        // P1 active at a corner (3 free squares), P2 active mid-board
        // (8 free squares), nothing else.
        let mut board = Board::new(5, 5);
        board.set(0, 0, Cell::Active(Player::One));
        board.set(2, 2, Cell::Active(Player::Two));

        let expected = 100.0 - 100.0 + 10.0 * 3.0 - 10.0 * 8.0;
        assert_eq!(estimate(Player::One, &board), expected);
    }

    #[test]
    fn passive_block_dominates_estimate() {
        let mut board = Board::new(5, 5);
        for x in 0..3 {
            for y in 0..3 {
                board.set(x, y, Cell::Passive(Player::One));
            }
        }
        board.set(4, 4, Cell::Active(Player::Two));

        let score = estimate(Player::One, &board);
        assert!(score > 9000.0, "block bonus missing: {}", score);
    }

    #[test]
    fn mobility_policies_disagree_with_multiple_colonies() {
        // Colony at the corner has 3 free squares, colony at (3,3) has 8.
        // (3,3) is scanned last in x-outer/y-inner order.
        let mut board = Board::new(5, 5);
        board.set(0, 0, Cell::Active(Player::One));
        board.set(3, 3, Cell::Active(Player::One));

        assert_eq!(
            mobility_with_policy(Player::One, &board, MobilityPolicy::SumOverColonies),
            11
        );
        assert_eq!(
            mobility_with_policy(Player::One, &board, MobilityPolicy::LastColonyOnly),
            8
        );
    }

    #[test]
    fn mobility_counts_shared_free_squares_per_colony() {
        // Two adjacent colonies share free neighbors; each counts its own.
        let mut board = Board::new(5, 5);
        board.set(1, 1, Cell::Active(Player::One));
        board.set(2, 1, Cell::Active(Player::One));

        // Each colony has 8 neighbors, one of which is the other colony.
        assert_eq!(
            mobility_with_policy(Player::One, &board, MobilityPolicy::SumOverColonies),
            14
        );
    }

    #[test]
    fn terminal_score_scales_advantage() {
        let mut board = Board::new(4, 4);
        board.set(0, 0, Cell::Active(Player::One));
        board.set(1, 0, Cell::Passive(Player::One));
        board.set(2, 0, Cell::Passive(Player::One));
        board.set(3, 3, Cell::Active(Player::Two));

        assert_eq!(terminal_score(Player::One, &board), 1001.0 * 2.0);
        assert_eq!(terminal_score(Player::Two, &board), -1001.0 * 2.0);
    }
}

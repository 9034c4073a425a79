//! Position evaluation.
//!
//! Scores a board position from a given player's perspective: a linear
//! heuristic for non-terminal positions and an exact colony-count score
//! for finished games.

pub mod heuristic;

pub use heuristic::{
    estimate, mobility, mobility_with_policy, terminal_score, MobilityPolicy, MOBILITY_POLICY,
};

//! Self-play game generation.
//!
//! Plays full Infectious games engine-versus-engine from generated starting
//! positions, alternating turns with explicit passes until neither player
//! can move. Records the moves, winner, and final colony advantage per game
//! as JSONL. Games always terminate: every step move consumes one empty
//! square and passives never give one back.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Board, Cell, Player, Square};
use crate::movegen::{has_legal_move, random_move};
use crate::protocol::ifen::encode_ifen;
use crate::protocol::notation::format_move;
use crate::search::search;

/// Configuration for self-play game generation.
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Search depth in plies for both sides.
    pub depth: u32,
    /// Board width in squares.
    pub width: i32,
    /// Board height in squares.
    pub height: i32,
    /// Number of random impassable squares per starting board.
    pub walls: u32,
    /// Number of opening plies played with random moves for variety.
    pub opening_plies: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            depth: 4,
            width: 8,
            height: 8,
            walls: 6,
            opening_plies: 2,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// One turn of a recorded game.
#[derive(Clone, Serialize)]
pub struct MoveRecord {
    /// Player id (1 or 2).
    pub player: u8,
    /// Move in wire notation (`pass` or `x1,y1>x2,y2`).
    pub action: String,
    /// Search score for the chosen move; absent for passes and random
    /// opening moves.
    pub score: Option<f64>,
}

/// A completed self-play game.
#[derive(Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    /// IFEN of the generated starting position.
    pub start_ifen: String,
    pub moves: Vec<MoveRecord>,
    /// Winner id, or `None` for a draw.
    pub winner: Option<u8>,
    /// Total turns played, passes included.
    pub plies: u32,
    /// Final colony advantage from player 1's perspective.
    pub advantage: i32,
}

/// Generates a starting board: player 1's active colony in the lower-left
/// corner, player 2's in the upper-right, plus `walls` random impassable
/// squares kept clear of both starting rings.
pub fn starting_board(width: i32, height: i32, walls: u32, rng: &mut impl Rng) -> Board {
    let mut board = Board::new(width, height);
    let p1 = Square::new(0, 0);
    let p2 = Square::new(width - 1, height - 1);
    board.set(p1.x, p1.y, Cell::Active(Player::One));
    board.set(p2.x, p2.y, Cell::Active(Player::Two));

    let clear_of = |s: Square, of: Square| (s.x - of.x).abs() > 1 || (s.y - of.y).abs() > 1;

    let mut placed = 0;
    let mut attempts = 0;
    while placed < walls && attempts < walls * 100 {
        attempts += 1;
        let square = Square::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if board.cell(square.x, square.y) == Cell::Empty
            && clear_of(square, p1)
            && clear_of(square, p2)
        {
            board.set(square.x, square.y, Cell::Impassable);
            placed += 1;
        }
    }

    board
}

/// Plays a single game to the double-pass end and returns its record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut board = starting_board(config.width, config.height, config.walls, rng);
    let start_ifen = encode_ifen(&board);

    let mut moves = Vec::new();
    let mut plies = 0u32;
    let mut current = Player::One;

    loop {
        if !has_legal_move(current, &board) {
            if !has_legal_move(current.opponent(), &board) {
                break;
            }
            moves.push(MoveRecord {
                player: current.id(),
                action: "pass".to_string(),
                score: None,
            });
            plies += 1;
            current = current.opponent();
            continue;
        }

        let (chosen, score) = if plies < config.opening_plies {
            (random_move(current, &board, rng), None)
        } else {
            let result = search(current, &mut board, config.depth);
            (result.best, Some(result.score))
        };
        // The player has at least one legal move here; if the chooser
        // declines anyway, take a random one rather than stalling.
        let mv = match chosen.or_else(|| random_move(current, &board, rng)) {
            Some(m) => m,
            None => break,
        };

        board.apply(&mv);
        moves.push(MoveRecord {
            player: current.id(),
            action: format_move(&mv),
            score,
        });
        plies += 1;
        current = current.opponent();
    }

    let advantage = board.advantage(Player::One);
    let winner = match advantage {
        a if a > 0 => Some(1),
        a if a < 0 => Some(2),
        _ => None,
    };

    GameRecord {
        game_id,
        start_ifen,
        moves,
        winner,
        plies,
        advantage,
    }
}

fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays the configured number of games and returns their records.
///
/// With more than one thread, games run concurrently on a rayon pool; each
/// game still uses its own deterministic per-game RNG, so results are
/// independent of scheduling.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    if config.threads <= 1 {
        return (0..config.num_games)
            .map(|i| {
                let mut rng = game_rng(config, i);
                let game = play_game(config, i, &mut rng);
                report_game(config, &game);
                game
            })
            .collect();
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let mut rng = game_rng(config, i);
                let game = play_game(config, i, &mut rng);
                report_game(config, &game);
                game
            })
            .collect()
    })
}

fn report_game(config: &SelfPlayConfig, game: &GameRecord) {
    if config.quiet {
        return;
    }
    let outcome = match game.winner {
        Some(w) => format!("player {} wins by {}", w, game.advantage.abs()),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} after {} plies",
        game.game_id + 1,
        config.num_games,
        outcome,
        game.plies,
    );
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out)?;
    }
    out.flush()
}

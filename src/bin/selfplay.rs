//! Self-play game generation CLI.
//!
//! Plays Infectious games engine-versus-engine and outputs game records as
//! JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --depth N         Search depth in plies (default: 4)
//!   --width N         Board width (default: 8)
//!   --height N        Board height (default: 8)
//!   --walls N         Random impassable squares per board (default: 6)
//!   --opening-plies N Random plies before searching (default: 2)
//!   --threads N       Number of parallel threads (default: 4)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress per-game progress output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use outbreak::selfplay::{run_self_play, write_jsonl, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--depth" => {
                i += 1;
                config.depth = args[i].parse().expect("invalid --depth value");
            }
            "--width" => {
                i += 1;
                config.width = args[i].parse().expect("invalid --width value");
            }
            "--height" => {
                i += 1;
                config.height = args[i].parse().expect("invalid --height value");
            }
            "--walls" => {
                i += 1;
                config.walls = args[i].parse().expect("invalid --walls value");
            }
            "--opening-plies" => {
                i += 1;
                config.opening_plies = args[i].parse().expect("invalid --opening-plies value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if config.width < 2 || config.height < 2 {
        eprintln!("board must be at least 2x2");
        std::process::exit(1);
    }

    let games = run_self_play(&config);

    let result = match output_path {
        Some(path) => {
            let file = File::create(&path)
                .unwrap_or_else(|e| panic!("failed to create {}: {}", path, e));
            write_jsonl(&games, &mut BufWriter::new(file))
        }
        None => write_jsonl(&games, &mut BufWriter::new(io::stdout().lock())),
    };
    if let Err(e) = result {
        eprintln!("failed to write games: {}", e);
        std::process::exit(1);
    }

    if !config.quiet {
        let p1_wins = games.iter().filter(|g| g.winner == Some(1)).count();
        let p2_wins = games.iter().filter(|g| g.winner == Some(2)).count();
        let draws = games.len() - p1_wins - p2_wins;
        eprintln!(
            "{} games: {} player 1 wins, {} player 2 wins, {} draws",
            games.len(),
            p1_wins,
            p2_wins,
            draws
        );
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --depth N         Search depth in plies (default: 4)");
    eprintln!("  --width N         Board width (default: 8)");
    eprintln!("  --height N        Board height (default: 8)");
    eprintln!("  --walls N         Random impassable squares per board (default: 6)");
    eprintln!("  --opening-plies N Random plies before searching (default: 2)");
    eprintln!("  --threads N       Number of parallel threads (default: 4)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress per-game progress output");
}

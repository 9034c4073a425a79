//! Outbreak -- an Infectious engine implementing the IUI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the IUI (Infectious Universal Interface) convention.

use std::io::{self, BufRead};

use outbreak::engine::Engine;
use outbreak::protocol::parser::{parse_command, Command};

/// Runs the main IUI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Iui => {
                engine.handle_iui(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { ifen } => {
                if let Err(e) = engine.set_position(&ifen) {
                    eprintln!("{}", e);
                }
            }
            Command::SetPlayer { player } => {
                engine.set_player(player);
            }
            Command::Go(params) => {
                engine.handle_go(&params, &mut out);
            }
            Command::Stop => {
                // Search is synchronous; nothing to interrupt.
            }
            Command::Quit => {
                break;
            }
        }
    }
}

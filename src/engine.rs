//! Engine state management.
//!
//! Holds the current board position, the side to move, and engine options,
//! and runs the negamax search for the `go` command. One turn is one
//! `position`/`setplayer`/`go` exchange: the board is built from the IFEN
//! snapshot, searched, and the chosen move reported as `bestmove`.

use std::collections::HashMap;
use std::io::Write;

use crate::board::{Board, Player};
use crate::protocol::ifen::parse_ifen;
use crate::protocol::notation::format_move;
use crate::protocol::parser::GoParams;
use crate::search::search;

/// Default search depth in plies.
const DEFAULT_DEPTH: u32 = 7;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub active_player: Option<Player>,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a new engine with no position or side to move.
    pub fn new() -> Self {
        Engine {
            position: None,
            active_player: None,
            options: HashMap::new(),
        }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
        self.active_player = None;
    }

    /// Sets the current board position from an IFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, ifen: &str) -> Result<(), String> {
        match parse_ifen(ifen) {
            Ok(board) => {
                self.position = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse IFEN: {}", e)),
        }
    }

    /// Sets the side to move.
    pub fn set_player(&mut self, player: Player) {
        self.active_player = Some(player);
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        match value {
            Some(v) => {
                self.options.insert(name, v);
            }
            None => {
                self.options.insert(name, String::new());
            }
        }
    }

    /// Returns the configured search depth from options, or the default.
    fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DEPTH)
    }

    /// Handles the IUI handshake: writes id, options, protocol_version, and iuiok.
    pub fn handle_iui<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name outbreak").unwrap();
        writeln!(out, "id author outbreak").unwrap();
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max 12",
            DEFAULT_DEPTH
        )
        .unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "iuiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: searches the current position for the
    /// active player and writes an `info` line followed by `bestmove`.
    pub fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) {
        let depth = params.depth.unwrap_or_else(|| self.depth());

        let player = match self.active_player {
            Some(p) => p,
            None => {
                eprintln!("go: no active player set");
                return;
            }
        };

        let board = match &mut self.position {
            Some(b) => b,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        let result = search(player, board, depth);

        writeln!(
            out,
            "info depth {} nodes {} score {}",
            depth, result.nodes, result.score
        )
        .unwrap();
        let best = result.best.unwrap_or(crate::board::Move::Pass);
        writeln!(out, "bestmove {}", format_move(&best)).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

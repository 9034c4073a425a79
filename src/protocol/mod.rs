//! IUI protocol handling.
//!
//! This module implements parsing and serialization for the IUI
//! (Infectious Universal Interface) protocol: IFEN position encoding, move
//! notation for the `bestmove` response, and the command parser for the
//! main loop.

pub mod ifen;
pub mod notation;
pub mod parser;

pub use ifen::{encode_ifen, parse_ifen, IfenError};
pub use notation::format_move;
pub use parser::{parse_command, Command, GoParams};

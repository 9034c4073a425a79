//! IUI command parser.
//!
//! Parses incoming IUI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Player;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoParams {
    pub depth: Option<u32>,
}

/// A parsed server-to-engine IUI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the IUI protocol handshake.
    Iui,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from an IFEN string.
    Position { ifen: String },

    /// Set the side to move.
    SetPlayer { player: Player },

    /// Begin calculating a move with optional search constraints.
    Go(GoParams),

    /// Interrupt the current search. The search is synchronous, so this is
    /// accepted and ignored.
    Stop,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "iui" => Some(Command::Iui),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "stop" => Some(Command::Stop),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setplayer" => parse_setplayer(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    // Find the "value" keyword to split name from value.
    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => {
            let name = tokens[2..].join(" ");
            (name, None)
        }
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <ifen>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position <ifen>'");
        return None;
    }
    // IFEN is a single token (no spaces) following "position".
    let ifen = tokens[1].to_string();
    Some(Command::Position { ifen })
}

/// Parses `setplayer <1|2>`.
fn parse_setplayer(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setplayer: expected 'setplayer <1|2>'");
        return None;
    }
    match tokens[1].parse::<u8>().ok().and_then(Player::from_id) {
        Some(player) => Some(Command::SetPlayer { player }),
        None => {
            eprintln!("unknown player: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `go [depth <n>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u32>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => {
                            eprintln!("invalid depth value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("iui"), Some(Command::Iui));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("stop"), Some(Command::Stop));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn ignores_empty_and_unknown_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate"), None);
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(parse_command("  iui  "), Some(Command::Iui));
    }

    #[test]
    fn parses_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name Depth value 5"),
            Some(Command::SetOption {
                name: "Depth".to_string(),
                value: Some("5".to_string()),
            })
        );
    }

    #[test]
    fn parses_setoption_without_value() {
        assert_eq!(
            parse_command("setoption name Ponder"),
            Some(Command::SetOption {
                name: "Ponder".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn rejects_malformed_setoption() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption Depth 5"), None);
    }

    #[test]
    fn parses_position() {
        assert_eq!(
            parse_command("position .../.../..."),
            Some(Command::Position {
                ifen: ".../.../...".to_string(),
            })
        );
        assert_eq!(parse_command("position"), None);
    }

    #[test]
    fn parses_setplayer() {
        assert_eq!(
            parse_command("setplayer 1"),
            Some(Command::SetPlayer { player: Player::One })
        );
        assert_eq!(
            parse_command("setplayer 2"),
            Some(Command::SetPlayer { player: Player::Two })
        );
        assert_eq!(parse_command("setplayer 3"), None);
        assert_eq!(parse_command("setplayer"), None);
    }

    #[test]
    fn parses_go_with_and_without_depth() {
        assert_eq!(parse_command("go"), Some(Command::Go(GoParams { depth: None })));
        assert_eq!(
            parse_command("go depth 4"),
            Some(Command::Go(GoParams { depth: Some(4) }))
        );
    }
}

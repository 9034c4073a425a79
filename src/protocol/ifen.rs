//! IFEN (Infectious FEN) encoding and decoding.
//!
//! IFEN is a compact single-line notation for a full board position: one
//! character per square, rows separated by `/`, top row (`y = height-1`)
//! first. Characters: `.` empty, `#` impassable, `1`/`!` player 1 active/
//! passive, `2`/`"` player 2 active/passive. Dimensions are implied by the
//! row count and row length.
//!
//! This is the snapshot boundary with the host: an unrecognized character
//! is a fatal schema mismatch and parsing fails, never defaults.

use crate::board::{Board, Cell};

/// Errors that can occur during IFEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum IfenError {
    #[error("empty IFEN string")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unrecognized cell character: '{0}'")]
    UnknownCell(char),
}

/// Parses an IFEN string into a board.
pub fn parse_ifen(ifen: &str) -> Result<Board, IfenError> {
    let trimmed = ifen.trim();
    if trimmed.is_empty() {
        return Err(IfenError::Empty);
    }

    let rows: Vec<&str> = trimmed.split('/').collect();
    let height = rows.len();
    let width = rows[0].chars().count();
    if width == 0 {
        return Err(IfenError::Empty);
    }

    let mut board = Board::new(width as i32, height as i32);
    for (i, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != width {
            return Err(IfenError::RaggedRow {
                row: i,
                expected: width,
                got,
            });
        }

        // Row 0 of the string is the top of the board.
        let y = (height - 1 - i) as i32;
        for (x, c) in row.chars().enumerate() {
            let cell = Cell::from_ifen_char(c).ok_or(IfenError::UnknownCell(c))?;
            board.set(x as i32, y, cell);
        }
    }

    Ok(board)
}

/// Encodes a board as an IFEN string.
pub fn encode_ifen(board: &Board) -> String {
    let mut out = String::new();
    for y in (0..board.height()).rev() {
        if y < board.height() - 1 {
            out.push('/');
        }
        for x in 0..board.width() {
            out.push(board.cell(x, y).ifen_char());
        }
    }
    out
}

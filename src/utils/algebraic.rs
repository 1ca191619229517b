//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, where `0 == a8` and `63 == h1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{file_of, row_of, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = b'8' - rank;
    Ok(row_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(format!("index {square}")));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'8' - row_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

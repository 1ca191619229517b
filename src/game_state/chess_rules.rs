//! Canonical chess-rule constants.
//!
//! Static rule literals shared by parsing, move generation and make/unmake:
//! the starting FEN, home squares for castling, and pawn rank geometry.
//!
//! Squares are indexed rank-major from the top of the board: `0 == a8`,
//! `7 == h8`, `56 == a1`, `63 == h1`.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_KING_HOME: Square = 60;
pub const BLACK_KING_HOME: Square = 4;

pub const WHITE_KINGSIDE_ROOK_HOME: Square = 63;
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 0;

/// Row (0 = eighth rank) a pawn of `color` starts on.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row a pawn of `color` promotes on.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Index delta for one pawn step forward.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -8,
        Color::Black => 8,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

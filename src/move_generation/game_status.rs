//! Terminal-state queries.
//!
//! Only checkmate and stalemate end the game here. The halfmove clock is kept
//! up to date by make/unmake but is never used to declare a draw, and
//! repetition is not tracked.

use serde::Serialize;

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::count_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: ColorName },
    Stalemate,
}

/// Serializable side name used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorName {
    White,
    Black,
}

impl From<Color> for ColorName {
    fn from(color: Color) -> Self {
        match color {
            Color::White => ColorName::White,
            Color::Black => ColorName::Black,
        }
    }
}

#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

pub fn is_checkmate(game_state: &mut GameState) -> bool {
    is_in_check(game_state) && count_legal_moves(game_state) == 0
}

pub fn is_stalemate(game_state: &mut GameState) -> bool {
    !is_in_check(game_state) && count_legal_moves(game_state) == 0
}

pub fn is_game_over(game_state: &mut GameState) -> bool {
    count_legal_moves(game_state) == 0
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    if count_legal_moves(game_state) > 0 {
        return GameStatus::Ongoing;
    }
    if is_in_check(game_state) {
        GameStatus::Checkmate {
            winner: game_state.side_to_move.opposite().into(),
        }
    } else {
        GameStatus::Stalemate
    }
}

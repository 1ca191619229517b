//! Pluggable board evaluation interfaces and the baseline implementation.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to `BoardScorer`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::count_legal_moves;

/// Weight applied to the legal-move-count difference.
pub const MOBILITY_WEIGHT: i32 = 2;

pub trait BoardScorer {
    /// Static score of `game_state`. Implementations may make and unmake
    /// moves while scoring but must return the state unchanged.
    fn score(&self, game_state: &mut GameState) -> i32;
}

/// Material (White positive) plus a small mobility bonus for the side to
/// move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialMobilityScorer;

impl MaterialMobilityScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .board
            .iter()
            .flatten()
            .map(|piece| match piece.color {
                Color::White => Self::piece_value(piece.kind),
                Color::Black => -Self::piece_value(piece.kind),
            })
            .sum()
    }

    /// Legal-move count for the side to move minus the count the opponent
    /// would have if it were on move.
    ///
    /// Only `side_to_move` is flipped for the opponent count; rights and the
    /// en-passant target stay as they are, and the flip is undone before
    /// returning.
    pub fn mobility_difference(game_state: &mut GameState) -> i32 {
        let side = game_state.side_to_move;
        let own_moves = count_legal_moves(game_state) as i32;

        game_state.side_to_move = side.opposite();
        let opponent_moves = count_legal_moves(game_state) as i32;
        game_state.side_to_move = side;

        own_moves - opponent_moves
    }
}

impl BoardScorer for MaterialMobilityScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        Self::material_balance_white_minus_black(game_state)
            + Self::mobility_difference(game_state) * MOBILITY_WEIGHT
    }
}

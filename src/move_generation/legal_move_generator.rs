//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation by piece kind, then filters
//! out moves that leave the mover's king attacked by making each candidate,
//! testing, and unmaking it again.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::generate_sliding_moves;

/// Moves that follow each piece's movement pattern for the side to move,
/// ignoring whether they expose the mover's king. Squares are scanned from
/// a8 to h1.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(64);
    let side = game_state.side_to_move;

    for (idx, slot) in game_state.board.iter().enumerate() {
        let Some(piece) = slot else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        let from = idx as Square;
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut pseudo),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                generate_sliding_moves(game_state, from, piece.kind, &mut pseudo)
            }
            PieceKind::King => generate_king_moves(game_state, from, &mut pseudo),
        }
    }

    pseudo
}

/// Legal moves for the side to move, in generation order.
///
/// Every candidate is made and unmade regardless of the outcome, so
/// `game_state` is unchanged on return.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mover = game_state.side_to_move;

    let mut legal = Vec::<Move>::with_capacity(pseudo.len());
    for mv in pseudo {
        make_move(game_state, mv, false);
        // Illegal if own king is in check after move.
        let exposes_king = is_king_in_check(game_state, mover);
        unmake_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}

#[inline]
pub fn count_legal_moves(game_state: &mut GameState) -> usize {
    generate_legal_moves(game_state).len()
}

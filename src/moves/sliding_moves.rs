//! Ray movement for bishops, rooks and queens.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{build_move, Move, MoveFlags};

pub const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
pub const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];
pub const QUEEN_DIRECTIONS: [i8; 8] = [-9, -7, 7, 9, -8, -1, 1, 8];

/// Ray directions for a sliding piece kind; empty for non-sliders.
#[inline]
pub const fn slider_directions(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Walks each ray from `from` until the edge, an own piece, or the first
/// enemy piece (which is captured).
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;

    for &direction in slider_directions(kind) {
        let mut current = from;
        // A single ray step never changes file by more than one.
        while let Some(to) = offset_square(current, direction, 1) {
            match game_state.piece_at(to) {
                None => out.push(build_move(side, from, to, kind, None, None, MoveFlags::NORMAL)),
                Some(target) => {
                    if target.color != side {
                        out.push(build_move(
                            side,
                            from,
                            to,
                            kind,
                            Some(target.kind),
                            None,
                            MoveFlags::NORMAL,
                        ));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

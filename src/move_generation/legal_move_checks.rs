use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::{KING_MAX_FILE_STEP, KING_OFFSETS};
use crate::moves::knight_moves::{KNIGHT_MAX_FILE_STEP, KNIGHT_OFFSETS};
use crate::moves::pawn_moves::pawn_capture_offsets;
use crate::moves::sliding_moves::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`.
///
/// Each piece type is probed outward from the target square, so no move
/// generation is involved.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        game_state.piece_at(sq) == Some(Piece::new(kind, attacker_color))
    };

    // A pawn attacks `square` from where the defender's own capture offsets
    // would land.
    for delta in pawn_capture_offsets(attacker_color.opposite()) {
        if offset_square(square, delta, 1).is_some_and(|sq| holds(sq, PieceKind::Pawn)) {
            return true;
        }
    }

    for delta in KNIGHT_OFFSETS {
        if offset_square(square, delta, KNIGHT_MAX_FILE_STEP)
            .is_some_and(|sq| holds(sq, PieceKind::Knight))
        {
            return true;
        }
    }

    for delta in KING_OFFSETS {
        if offset_square(square, delta, KING_MAX_FILE_STEP)
            .is_some_and(|sq| holds(sq, PieceKind::King))
        {
            return true;
        }
    }

    if ray_hits(game_state, square, &BISHOP_DIRECTIONS, attacker_color, PieceKind::Bishop) {
        return true;
    }

    ray_hits(game_state, square, &ROOK_DIRECTIONS, attacker_color, PieceKind::Rook)
}

/// Walks each ray to its first occupant and reports whether that occupant is
/// an attacker of `slider` kind or a queen.
fn ray_hits(
    game_state: &GameState,
    square: Square,
    directions: &[i8],
    attacker_color: Color,
    slider: PieceKind,
) -> bool {
    for &direction in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, direction, 1) {
            if let Some(piece) = game_state.piece_at(next) {
                if piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

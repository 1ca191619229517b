use crate::game_state::chess_rules::{pawn_direction, pawn_start_row, promotion_row};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{build_move, Move, MoveFlags};

/// Diagonal capture deltas for `color`, relative to the pawn's square.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [i8; 2] {
    let forward = pawn_direction(color);
    [forward - 1, forward + 1]
}

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let forward = pawn_direction(side);

    if let Some(one_step) = offset_square(from, forward, 0) {
        if game_state.piece_at(one_step).is_none() {
            push_pawn_move(side, from, one_step, None, MoveFlags::NORMAL, out);

            if row_of(from) == pawn_start_row(side) {
                if let Some(two_step) = offset_square(one_step, forward, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(build_move(
                            side,
                            from,
                            two_step,
                            PieceKind::Pawn,
                            None,
                            None,
                            MoveFlags::DOUBLE_PAWN_PUSH,
                        ));
                    }
                }
            }
        }
    }

    for delta in pawn_capture_offsets(side) {
        let Some(target) = offset_square(from, delta, 1) else {
            continue;
        };

        match game_state.piece_at(target) {
            Some(piece) if piece.color != side => {
                push_pawn_move(side, from, target, Some(piece.kind), MoveFlags::NORMAL, out);
            }
            None if game_state.en_passant_square == Some(target)
                && en_passant_victim_square(side, target)
                    .and_then(|sq| game_state.piece_at(sq))
                    == Some(Piece::new(PieceKind::Pawn, side.opposite())) =>
            {
                out.push(build_move(
                    side,
                    from,
                    target,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    MoveFlags::EN_PASSANT,
                ));
            }
            _ => {}
        }
    }
}

/// Pushes a pawn move, expanding it into the four promotion choices when it
/// lands on the back rank.
fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    flags: MoveFlags,
    out: &mut Vec<Move>,
) {
    if row_of(to) == promotion_row(side) {
        for promo in PieceKind::PROMOTIONS {
            out.push(build_move(side, from, to, PieceKind::Pawn, captured, Some(promo), flags));
        }
    } else {
        out.push(build_move(side, from, to, PieceKind::Pawn, captured, None, flags));
    }
}

/// Square holding the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(mover: Color, to: Square) -> Option<Square> {
    offset_square(to, -pawn_direction(mover), 0)
}

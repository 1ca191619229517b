use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{build_move, Move, MoveFlags};

/// Index deltas for the eight knight jumps.
pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// A knight jump never moves more than two files; anything wider wrapped.
pub const KNIGHT_MAX_FILE_STEP: u8 = 2;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_step_moves(
        game_state,
        from,
        PieceKind::Knight,
        &KNIGHT_OFFSETS,
        KNIGHT_MAX_FILE_STEP,
        out,
    );
}

/// Single-step movement shared by knights and kings: each in-bounds target
/// that is empty or holds an enemy piece becomes a move.
pub(crate) fn push_step_moves(
    game_state: &GameState,
    from: Square,
    piece: PieceKind,
    offsets: &[i8],
    max_file_step: u8,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;

    for &delta in offsets {
        let Some(to) = offset_square(from, delta, max_file_step) else {
            continue;
        };

        match game_state.piece_at(to) {
            None => out.push(build_move(side, from, to, piece, None, None, MoveFlags::NORMAL)),
            Some(target) if target.color != side => out.push(build_move(
                side,
                from,
                to,
                piece,
                Some(target.kind),
                None,
                MoveFlags::NORMAL,
            )),
            Some(_) => {}
        }
    }
}

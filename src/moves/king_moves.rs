use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::knight_moves::push_step_moves;
use crate::moves::move_descriptions::{build_move, Move, MoveFlags};

pub const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub const KING_MAX_FILE_STEP: u8 = 1;

/// Geometry of one castling option.
struct CastleSide {
    right: CastlingRights,
    rook_home: Square,
    /// Squares that must be empty between king and rook.
    between: &'static [Square],
    /// King start, transit and destination; none may be attacked.
    king_path: [Square; 3],
    king_to: Square,
    flag: MoveFlags,
}

const WHITE_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_WHITE_KINGSIDE,
        rook_home: WHITE_KINGSIDE_ROOK_HOME,
        between: &[61, 62],
        king_path: [60, 61, 62],
        king_to: 62,
        flag: MoveFlags::KING_CASTLE,
    },
    CastleSide {
        right: CASTLE_WHITE_QUEENSIDE,
        rook_home: WHITE_QUEENSIDE_ROOK_HOME,
        between: &[57, 58, 59],
        king_path: [60, 59, 58],
        king_to: 58,
        flag: MoveFlags::QUEEN_CASTLE,
    },
];

const BLACK_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_BLACK_KINGSIDE,
        rook_home: BLACK_KINGSIDE_ROOK_HOME,
        between: &[5, 6],
        king_path: [4, 5, 6],
        king_to: 6,
        flag: MoveFlags::KING_CASTLE,
    },
    CastleSide {
        right: CASTLE_BLACK_QUEENSIDE,
        rook_home: BLACK_QUEENSIDE_ROOK_HOME,
        between: &[1, 2, 3],
        king_path: [4, 3, 2],
        king_to: 2,
        flag: MoveFlags::QUEEN_CASTLE,
    },
];

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_step_moves(
        game_state,
        from,
        PieceKind::King,
        &KING_OFFSETS,
        KING_MAX_FILE_STEP,
        out,
    );
    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    if king_from != king_home(side) {
        return;
    }

    let enemy = side.opposite();
    let options = match side {
        Color::White => &WHITE_CASTLES,
        Color::Black => &BLACK_CASTLES,
    };

    for option in options {
        if game_state.castling_rights & option.right == 0 {
            continue;
        }
        if game_state.piece_at(option.rook_home) != Some(Piece::new(PieceKind::Rook, side)) {
            continue;
        }
        if option.between.iter().any(|&sq| game_state.piece_at(sq).is_some()) {
            continue;
        }
        if option
            .king_path
            .iter()
            .any(|&sq| is_square_attacked(game_state, sq, enemy))
        {
            continue;
        }

        out.push(build_move(
            side,
            king_from,
            option.king_to,
            PieceKind::King,
            None,
            None,
            option.flag,
        ));
    }
}

/// Rook relocation for a castling move: `(rook_from, rook_to)`.
pub fn castling_rook_squares(color: Color, flags: MoveFlags) -> Option<(Square, Square)> {
    match (color, flags.contains(MoveFlags::KING_CASTLE), flags.contains(MoveFlags::QUEEN_CASTLE)) {
        (Color::White, true, _) => Some((WHITE_KINGSIDE_ROOK_HOME, 61)),
        (Color::White, _, true) => Some((WHITE_QUEENSIDE_ROOK_HOME, 59)),
        (Color::Black, true, _) => Some((BLACK_KINGSIDE_ROOK_HOME, 5)),
        (Color::Black, _, true) => Some((BLACK_QUEENSIDE_ROOK_HOME, 3)),
        _ => None,
    }
}

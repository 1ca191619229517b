use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Holds a full copy of everything `make_move` can change, so restoring is a
/// plain field-by-field copy with no recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub logged: bool,

    pub prev_board: [Option<Piece>; 64],
    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

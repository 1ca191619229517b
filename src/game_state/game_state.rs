//! Core mutable board state.
//!
//! `GameState` is the central model for the engine. It stores a 64-square
//! mailbox board, turn/state flags, clocks, and the snapshot stack used by
//! make/unmake, plus the log of moves applied through the user-facing path.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::{parse_move_request, MoveRequest};

/// Complete, mutable chess position with its reversible history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Indexed by square, `0 == a8`.
    pub board: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Make/unmake stack ---
    pub undo_stack: Vec<UndoState>,
    pub move_log: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
            move_log: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, White to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Replaces this state with the position described by `fen`.
    ///
    /// On failure `self` is left untouched. On success the undo stack and
    /// move log are cleared along with everything else.
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        let parsed = parse_fen(fen)?;
        debug!("loaded position {fen}");
        *self = parsed;
        Ok(())
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(usize::from(square)).copied().flatten()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board
            .iter()
            .position(|p| *p == Some(Piece::new(PieceKind::King, color)))
            .map(|idx| idx as Square)
    }

    /// Legal moves for the side to move, in generation order.
    ///
    /// Takes `&mut self` because legality is decided by making and unmaking
    /// each candidate; the state is identical before and after the call.
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Resolves `request` against the legal moves and applies it, appending it
    /// to the move log.
    ///
    /// Promotion moves only match when the request names the same promotion
    /// piece. Nothing changes when no legal move matches.
    pub fn apply_user_move(&mut self, request: MoveRequest) -> ChessResult<Move> {
        let chosen = self.legal_moves().into_iter().find(|mv| {
            mv.from == request.from
                && mv.to == request.to
                && (mv.promotion.is_none() || mv.promotion == request.promotion)
        });

        let Some(mv) = chosen else {
            return Err(ChessError::IllegalMove {
                from: square_to_algebraic(request.from)?,
                to: square_to_algebraic(request.to)?,
            });
        };

        make_move(self, mv, true);
        Ok(mv)
    }

    /// Parses coordinate text such as `"e2e4"` or `"e7e8q"` and applies it.
    pub fn apply_long_algebraic(&mut self, text: &str) -> ChessResult<Move> {
        let request = parse_move_request(text)?;
        self.apply_user_move(request)
    }

    /// Reverts the most recent move, whether it came from the user path or
    /// from search.
    pub fn undo(&mut self) -> ChessResult<Move> {
        unmake_move(self).ok_or(ChessError::NothingToUndo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.king_square(Color::White), Some(60));
        assert_eq!(game.king_square(Color::Black), Some(4));
        assert_eq!(
            game.piece_at(algebraic_to_square("d1").unwrap()),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn failed_load_leaves_state_untouched() {
        let mut game = GameState::new_game();
        game.apply_long_algebraic("e2e4").expect("e2e4 should be legal");
        let before = game.clone();

        let err = game.load_fen("rnbqkbnr/pppppppp/8/8 w KQkq - 0 1").unwrap_err();
        assert!(matches!(err, ChessError::InvalidFen(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn successful_load_clears_history() {
        let mut game = GameState::new_game();
        game.apply_long_algebraic("e2e4").unwrap();
        game.load_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        assert!(game.undo_stack.is_empty());
        assert!(game.move_log.is_empty());
        assert_eq!(game.undo(), Err(ChessError::NothingToUndo));
    }

    #[test]
    fn user_move_is_logged_and_undone() {
        let mut game = GameState::new_game();
        let mv = game.apply_long_algebraic("g1f3").expect("g1f3 should be legal");

        assert_eq!(mv.piece, PieceKind::Knight);
        assert_eq!(game.move_log, vec![mv]);
        assert_eq!(game.side_to_move, Color::Black);

        assert_eq!(game.undo(), Ok(mv));
        assert!(game.move_log.is_empty());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn illegal_user_move_is_rejected_without_mutation() {
        let mut game = GameState::new_game();
        let err = game.apply_long_algebraic("e2e5").unwrap_err();

        assert_eq!(
            err,
            ChessError::IllegalMove {
                from: "e2".to_owned(),
                to: "e5".to_owned()
            }
        );
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn structured_request_matches_promotion_choice() {
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let a7 = algebraic_to_square("a7").unwrap();
        let a8 = algebraic_to_square("a8").unwrap();

        let missing_piece = MoveRequest {
            from: a7,
            to: a8,
            promotion: None,
        };
        assert!(game.apply_user_move(missing_piece).is_err());

        let knight = MoveRequest {
            from: a7,
            to: a8,
            promotion: Some(PieceKind::Knight),
        };
        let mv = game.apply_user_move(knight).expect("underpromotion should be legal");
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert_eq!(game.piece_at(a8), Some(Piece::new(PieceKind::Knight, Color::White)));
    }
}

//! In-place make/unmake.
//!
//! `make_move` pushes a full snapshot before touching anything, and
//! `unmake_move` restores from that snapshot alone. Search, the legality
//! filter and the user-facing apply path all go through this pair.

use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::castling_rook_squares;
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::moves::pawn_moves::en_passant_victim_square;

/// Applies `mv` to `game_state`, which must be the position `mv` was
/// generated from. `logged` also appends the move to the move log.
pub fn make_move(game_state: &mut GameState, mv: Move, logged: bool) {
    game_state.undo_stack.push(UndoState {
        mv,
        logged,
        prev_board: game_state.board,
        prev_side_to_move: game_state.side_to_move,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });
    if logged {
        game_state.move_log.push(mv);
    }

    let moving_color = mv.color;
    let moved = game_state.board[usize::from(mv.from)].take();

    // Handle captures.
    let captured = if mv.flags.contains(MoveFlags::EN_PASSANT) {
        en_passant_victim_square(moving_color, mv.to)
            .and_then(|sq| game_state.board[usize::from(sq)].take())
    } else {
        game_state.board[usize::from(mv.to)]
    };

    // Place moved/promoted piece on destination.
    let placed_kind = mv.promotion.unwrap_or(mv.piece);
    game_state.board[usize::from(mv.to)] = Some(Piece::new(placed_kind, moving_color));

    // Castling rook move.
    if let Some((rook_from, rook_to)) = castling_rook_squares(moving_color, mv.flags) {
        game_state.board[usize::from(rook_from)] = None;
        game_state.board[usize::from(rook_to)] = Some(Piece::new(PieceKind::Rook, moving_color));
    }

    update_castling_rights(game_state, mv, captured);

    game_state.en_passant_square = if mv.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH) {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    let moved_pawn = moved.is_some_and(|p| p.kind == PieceKind::Pawn);
    if moved_pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = moving_color.opposite();
}

/// Restores the state saved by the most recent `make_move` and returns the
/// move it undid, or `None` when there is nothing to undo.
pub fn unmake_move(game_state: &mut GameState) -> Option<Move> {
    let undo = game_state.undo_stack.pop()?;

    game_state.board = undo.prev_board;
    game_state.side_to_move = undo.prev_side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;

    if undo.logged {
        game_state.move_log.pop();
    }

    Some(undo.mv)
}

fn update_castling_rights(game_state: &mut GameState, mv: Move, captured: Option<Piece>) {
    if mv.piece == PieceKind::King {
        match mv.color {
            Color::White => {
                game_state.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
            }
            Color::Black => {
                game_state.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE)
            }
        }
    }

    if mv.piece == PieceKind::Rook {
        game_state.castling_rights &= !right_for_rook_home(mv.from);
    }

    // Capturing a rook on its home corner also removes the right.
    if captured.is_some_and(|p| p.kind == PieceKind::Rook) {
        game_state.castling_rights &= !right_for_rook_home(mv.to);
    }
}

fn right_for_rook_home(square: Square) -> CastlingRights {
    match square {
        WHITE_KINGSIDE_ROOK_HOME => CASTLE_WHITE_KINGSIDE,
        WHITE_QUEENSIDE_ROOK_HOME => CASTLE_WHITE_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => CASTLE_BLACK_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{make_move, unmake_move};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;
    use crate::utils::algebraic::algebraic_to_square;
    use pretty_assertions::assert_eq;

    fn find(game: &mut GameState, from: &str, to: &str) -> Move {
        let from = algebraic_to_square(from).unwrap();
        let to = algebraic_to_square(to).unwrap();
        game.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .expect("move should be legal")
    }

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).unwrap()
    }

    #[test]
    fn double_push_sets_and_next_move_clears_en_passant() {
        let mut game = GameState::new_game();
        let mv = find(&mut game, "e2", "e4");
        make_move(&mut game, mv, false);
        assert_eq!(game.en_passant_square, Some(sq("e3")));
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);

        let reply = find(&mut game, "g8", "f6");
        make_move(&mut game, reply, false);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.halfmove_clock, 1);
        assert_eq!(game.fullmove_number, 2);
    }

    #[test]
    fn en_passant_removes_pawn_behind_destination_and_restores() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let before = game.clone();
        let mv = find(&mut game, "e5", "d6");
        assert!(mv.is_en_passant());

        make_move(&mut game, mv, false);
        assert_eq!(game.piece_at(sq("d5")), None);
        assert_eq!(game.piece_at(sq("d6")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(game.halfmove_clock, 0);

        assert_eq!(unmake_move(&mut game), Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn castling_relocates_rook_and_clears_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 10").unwrap();
        let before = game.clone();
        let mv = find(&mut game, "e8", "c8");
        assert!(mv.is_castle());

        make_move(&mut game, mv, false);
        assert_eq!(game.piece_at(sq("d8")), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(game.piece_at(sq("a8")), None);
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
        assert_eq!(game.fullmove_number, 11);
        assert_eq!(game.halfmove_clock, 4);

        unmake_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn rook_capture_on_home_square_clears_that_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = find(&mut game, "a1", "a8");
        make_move(&mut game, mv, false);
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
    }

    #[test]
    fn promotion_places_chosen_piece() {
        let mut game = GameState::from_fen("8/4P2k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let mv = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.promotion == Some(PieceKind::Rook))
            .unwrap();
        make_move(&mut game, mv, false);
        assert_eq!(game.piece_at(sq("e8")), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(game.piece_at(sq("e7")), None);
    }

    #[test]
    fn unmake_on_empty_stack_is_none() {
        let mut game = GameState::new_game();
        assert_eq!(unmake_move(&mut game), None);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn lost_right_is_not_recomputed_after_rook_returns() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        game.apply_long_algebraic("h1h2").unwrap();
        game.apply_long_algebraic("e8d8").unwrap();
        game.apply_long_algebraic("h2h1").unwrap();
        assert_eq!(game.castling_rights, 0);

        // Undo back to the start restores the right from the snapshot.
        game.undo().unwrap();
        game.undo().unwrap();
        game.undo().unwrap();
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE);
    }

    #[test]
    fn en_passant_window_lasts_one_move() {
        let mut game = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
        game.apply_long_algebraic("e2e4").unwrap();
        assert!(game.legal_moves().iter().any(|mv| mv.is_en_passant()));

        game.apply_long_algebraic("e8d8").unwrap();
        game.apply_long_algebraic("e1d1").unwrap();
        assert!(!game.legal_moves().iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn random_walk_unwinds_to_start() {
        use rand::rngs::StdRng;
        use rand::seq::IndexedRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ] {
            let mut game = GameState::from_fen(fen).unwrap();
            let start = game.clone();
            let mut history = Vec::new();

            for _ in 0..60 {
                let moves = game.legal_moves();
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                history.push((game.clone(), mv));
                make_move(&mut game, mv, true);
            }

            while let Some((snapshot, mv)) = history.pop() {
                assert_eq!(unmake_move(&mut game), Some(mv));
                assert_eq!(game, snapshot);
            }
            assert_eq!(game, start);
        }
    }
}

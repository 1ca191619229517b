use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        board,
        game_state.side_to_move.fen_char(),
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for (row, rank) in game_state.board.chunks(8).enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;
    use pretty_assertions::assert_eq;

    fn assert_same_position(a: &GameState, b: &GameState) {
        assert_eq!(a.board, b.board);
        assert_eq!(a.side_to_move, b.side_to_move);
        assert_eq!(a.castling_rights, b.castling_rights);
        assert_eq!(a.en_passant_square, b.en_passant_square);
        assert_eq!(a.halfmove_clock, b.halfmove_clock);
        assert_eq!(a.fullmove_number, b.fullmove_number);
    }

    #[test]
    fn round_trip_known_positions() {
        let fens = [
            STARTING_POSITION_FEN,
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        ];

        for fen in fens {
            let parsed = parse_fen(fen).expect("FEN should parse");
            let generated = generate_fen(&parsed);
            assert_eq!(generated, fen);

            let reparsed = parse_fen(&generated).expect("generated FEN should parse");
            assert_same_position(&reparsed, &parsed);
        }
    }

    #[test]
    fn castling_letters_are_normalized() {
        let parsed =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").expect("FEN should parse");
        assert_eq!(generate_fen(&parsed), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn serialization_tracks_played_moves() {
        let mut game = GameState::new_game();
        game.apply_long_algebraic("e2e4").unwrap();
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        game.apply_long_algebraic("c7c5").unwrap();
        game.apply_long_algebraic("g1f3").unwrap();
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }
}

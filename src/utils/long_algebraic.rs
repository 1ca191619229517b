//! Coordinate move text ("e2e4", "e7e8q") and the structured request it
//! parses into.
//!
//! A `MoveRequest` is not a move yet: it only names squares and an optional
//! promotion piece. `GameState::apply_user_move` resolves it against the
//! legal moves of the current position.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    /// Builds a request from square names and an optional promotion letter.
    pub fn from_squares(from: &str, to: &str, promotion: Option<char>) -> ChessResult<Self> {
        let promotion = promotion.map(char_to_promotion).transpose()?;
        Ok(Self {
            from: algebraic_to_square(from)?,
            to: algebraic_to_square(to)?,
            promotion,
        })
    }
}

/// Parses four or five characters of coordinate text.
pub fn parse_move_request(text: &str) -> ChessResult<MoveRequest> {
    let cleaned = text.trim();
    if !cleaned.is_ascii() || (cleaned.len() != 4 && cleaned.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let bad_text = |_| ChessError::InvalidMoveText(text.to_owned());
    let from = algebraic_to_square(&cleaned[0..2]).map_err(bad_text)?;
    let to = algebraic_to_square(&cleaned[2..4]).map_err(bad_text)?;
    let promotion = cleaned[4..]
        .chars()
        .next()
        .map(char_to_promotion)
        .transpose()?;

    Ok(MoveRequest {
        from,
        to,
        promotion,
    })
}

/// Formats a move as coordinate text, with a lowercase promotion letter.
pub fn move_to_long_algebraic(mv: &Move) -> ChessResult<String> {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(promotion) = mv.promotion {
        out.push(promotion.to_char());
    }

    Ok(out)
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_char(ch) {
        Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
            Ok(kind)
        }
        _ => Err(ChessError::InvalidMoveText(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{move_to_long_algebraic, parse_move_request, MoveRequest};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn parses_plain_and_promotion_text() {
        let plain = parse_move_request("e2e4").unwrap();
        assert_eq!(plain.from, algebraic_to_square("e2").unwrap());
        assert_eq!(plain.to, algebraic_to_square("e4").unwrap());
        assert_eq!(plain.promotion, None);

        let promo = parse_move_request(" a7a8Q ").unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Queen));
        assert_eq!(
            promo,
            MoveRequest::from_squares("a7", "a8", Some('q')).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e2", "e2e", "e2e9", "z2e4", "e7e8k", "e7e8qq", "é2e4"] {
            assert!(
                matches!(parse_move_request(bad), Err(ChessError::InvalidMoveText(_))),
                "expected failure for {bad:?}"
            );
        }
    }

    #[test]
    fn legal_moves_format_back_to_text() {
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let texts: Vec<String> = game
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_promotion())
            .map(|mv| move_to_long_algebraic(mv).unwrap())
            .collect();
        assert_eq!(texts, vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    }

    #[test]
    fn castling_and_en_passant_resolve_from_text() {
        let mut castle = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(castle.apply_long_algebraic("e1g1").unwrap().is_castle());

        let mut ep = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert!(ep.apply_long_algebraic("e5d6").unwrap().is_en_passant());
    }
}

//! Human-facing move text for recommendation output.

use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::square_to_algebraic;

pub const NO_MOVE_TEXT: &str = "No move found";

/// Renders `e2-e4`, `d4xe5`, or `e7-e8=Q`.
pub fn move_to_display(mv: Option<&Move>) -> String {
    let Some(mv) = mv else {
        return NO_MOVE_TEXT.to_owned();
    };

    let from = square_to_algebraic(mv.from).unwrap_or_default();
    let to = square_to_algebraic(mv.to).unwrap_or_default();
    let separator = if mv.is_capture() { 'x' } else { '-' };

    let mut out = format!("{from}{separator}{to}");
    if let Some(promotion) = mv.promotion {
        out.push('=');
        out.push(promotion.to_char().to_ascii_uppercase());
    }
    out
}

pub fn line_to_display(line: &[Move]) -> Vec<String> {
    line.iter().map(|mv| move_to_display(Some(mv))).collect()
}

#[cfg(test)]
mod tests {
    use super::{move_to_display, NO_MOVE_TEXT};
    use crate::game_state::game_state::GameState;

    #[test]
    fn formats_quiet_capture_and_promotion() {
        let mut game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = game.legal_moves();

        let push_queen = moves.iter().find(|mv| !mv.is_capture() && mv.is_promotion()).unwrap();
        assert_eq!(move_to_display(Some(push_queen)), "a7-a8=Q");

        let take_knight = moves
            .iter()
            .filter(|mv| mv.is_capture())
            .last()
            .unwrap();
        assert_eq!(move_to_display(Some(take_knight)), "a7xb8=N");

        let king_step = moves.iter().find(|mv| mv.promotion.is_none()).unwrap();
        assert_eq!(move_to_display(Some(king_step)), "e1-d2");
    }

    #[test]
    fn missing_move_has_placeholder() {
        assert_eq!(move_to_display(None), NO_MOVE_TEXT);
    }
}

//! Perft node counting over the in-place make/unmake path.
//!
//! Used to check move generation against published counts, and by the
//! criterion bench.

use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::is_in_check;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::{count_legal_moves, generate_legal_moves};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf node count only; skips the per-leaf check classification.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        make_move(game_state, mv, false);
        nodes += perft(game_state, depth - 1);
        unmake_move(game_state);
    }
    nodes
}

/// Leaf counts with a breakdown of the move that reached each leaf.
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        make_move(game_state, mv, false);
        if depth == 1 {
            total.merge(classify_leaf(game_state, &mv));
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        unmake_move(game_state);
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in generate_legal_moves(game_state) {
        make_move(game_state, mv, false);
        out.push((mv, perft(game_state, depth - 1)));
        unmake_move(game_state);
    }
    out
}

fn classify_leaf(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    let gives_check = is_in_check(game_state);
    PerftCounts {
        nodes: 1,
        captures: u64::from(mv.is_capture()),
        en_passant: u64::from(mv.is_en_passant()),
        castles: u64::from(mv.is_castle()),
        promotions: u64::from(mv.is_promotion()),
        checks: u64::from(gives_check),
        checkmates: u64::from(gives_check && count_legal_moves(game_state) == 0),
    }
}

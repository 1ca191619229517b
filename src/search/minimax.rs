//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The whole search walks a single `GameState` in place. Every move made at a
//! node is unmade before the node returns, including on a pruning break, so
//! the caller gets its position back unchanged.
//!
//! Scores are oriented to the side on move at the root: that side maximizes
//! and the opponent minimizes. There is no transposition table and no move
//! ordering beyond generation order.

use log::{debug, trace};

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Root-relative: higher is better for the side that was on move.
    pub score: i32,
    /// Principal line, starting with `best_move`.
    pub line: Vec<Move>,
    pub nodes: u64,
}

/// Per-node outcome threaded back up the tree.
struct NodeResult {
    score: i32,
    best_move: Option<Move>,
    line: Vec<Move>,
}

pub fn search<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let root_color = game_state.side_to_move;
    let mut nodes = 0u64;

    let node = alpha_beta(
        game_state,
        scorer,
        config.max_depth,
        i32::MIN,
        i32::MAX,
        root_color,
        0,
        &mut nodes,
    );

    debug!(
        "search depth {} nodes {} score {} line length {}",
        config.max_depth,
        nodes,
        node.score,
        node.line.len()
    );

    SearchResult {
        best_move: node.best_move,
        score: node.score,
        line: node.line,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    root_color: Color,
    ply: u8,
    nodes: &mut u64,
) -> NodeResult {
    *nodes += 1;

    if depth == 0 {
        return leaf(game_state, scorer, root_color);
    }

    let moves = generate_legal_moves(game_state);
    if moves.is_empty() {
        return leaf(game_state, scorer, root_color);
    }

    let maximizing = game_state.side_to_move == root_color;
    let mut best = NodeResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
        line: Vec::new(),
    };

    for mv in moves {
        make_move(game_state, mv, false);
        let child = alpha_beta(
            game_state,
            scorer,
            depth - 1,
            alpha,
            beta,
            root_color,
            ply + 1,
            nodes,
        );
        unmake_move(game_state);

        if ply == 0 {
            trace!("root move {:?} -> {:?} score {}", mv.from, mv.to, child.score);
        }

        let improves = if maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };
        if improves {
            best.score = child.score;
            best.best_move = Some(mv);
            best.line = prepend(mv, child.line);
        }

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Plain minimax over the same tree and leaf scoring, without pruning.
///
/// Exponentially slower than `search`; kept to cross-check pruning.
pub fn minimax_without_pruning<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
) -> (Option<Move>, i32) {
    let root_color = game_state.side_to_move;
    let node = minimax_node(game_state, scorer, depth, root_color);
    (node.best_move, node.score)
}

fn minimax_node<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    root_color: Color,
) -> NodeResult {
    if depth == 0 {
        return leaf(game_state, scorer, root_color);
    }

    let moves = generate_legal_moves(game_state);
    if moves.is_empty() {
        return leaf(game_state, scorer, root_color);
    }

    let maximizing = game_state.side_to_move == root_color;
    let mut best = NodeResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
        line: Vec::new(),
    };

    for mv in moves {
        make_move(game_state, mv, false);
        let child = minimax_node(game_state, scorer, depth - 1, root_color);
        unmake_move(game_state);

        let improves = if maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };
        if improves {
            best.score = child.score;
            best.best_move = Some(mv);
            best.line = prepend(mv, child.line);
        }
    }

    best
}

/// Static evaluation flipped so the root side is always the maximizer.
fn leaf<S: BoardScorer>(game_state: &mut GameState, scorer: &S, root_color: Color) -> NodeResult {
    let white_relative = scorer.score(game_state);
    let score = match root_color {
        Color::White => white_relative,
        Color::Black => -white_relative,
    };

    NodeResult {
        score,
        best_move: None,
        line: Vec::new(),
    }
}

fn prepend(mv: Move, tail: Vec<Move>) -> Vec<Move> {
    let mut line = Vec::with_capacity(tail.len() + 1);
    line.push(mv);
    line.extend(tail);
    line
}

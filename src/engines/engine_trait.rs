//! Engine abstraction layer used by the CLI.
//!
//! Defines the request parameters and the report payload so a caller can ask
//! any engine for a recommendation through a single trait interface.

use serde::Serialize;

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::GameStatus;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's default depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineOutput {
    #[serde(skip)]
    pub best_move: Option<Move>,
    pub best_move_display: String,
    pub best_move_uci: Option<String>,
    /// Root-relative score of the searched line.
    pub score: i32,
    pub line: Vec<String>,
    pub line_display: Vec<String>,
    pub nodes: u64,
    /// Status of the position after `best_move` is played.
    pub status: GameStatus,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Recommends a move for the side to move. `game_state` is searched in
    /// place and handed back unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput>;
}

//! Fixed-depth minimax recommendation engine.
//!
//! Wraps the alpha-beta search with a default depth and the material plus
//! mobility scorer, and turns the result into a serializable report.

use log::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::search::board_scoring::MaterialMobilityScorer;
use crate::search::minimax::{search, SearchConfig};
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::move_display::{line_to_display, move_to_display};

pub struct MinimaxEngine {
    default_depth: u8,
    scorer: MaterialMobilityScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: MaterialMobilityScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        match game_status(game_state) {
            GameStatus::Ongoing => {}
            GameStatus::Checkmate { winner } => {
                return Err(ChessError::GameOver(format!("checkmate, {winner:?} wins")));
            }
            GameStatus::Stalemate => {
                return Err(ChessError::GameOver("stalemate".to_owned()));
            }
        }

        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let result = search(game_state, &self.scorer, SearchConfig { max_depth: depth });
        debug!(
            "{} engine chose {:?} at depth {depth}",
            self.name(),
            result.best_move.map(|mv| (mv.from, mv.to))
        );

        let best_move_uci = result.best_move.as_ref().map(move_to_long_algebraic).transpose()?;
        let line = result
            .line
            .iter()
            .map(move_to_long_algebraic)
            .collect::<ChessResult<Vec<_>>>()?;

        let status = match result.best_move {
            Some(mv) => {
                make_move(game_state, mv, false);
                let after = game_status(game_state);
                unmake_move(game_state);
                after
            }
            None => GameStatus::Ongoing,
        };

        Ok(EngineOutput {
            best_move: result.best_move,
            best_move_display: move_to_display(result.best_move.as_ref()),
            best_move_uci,
            score: result.score,
            line,
            line_display: line_to_display(&result.line),
            nodes: result.nodes,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::errors::ChessError;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::game_status::GameStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn recommends_capture_and_reports_line() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
        let before = game.clone();
        let output = MinimaxEngine::default()
            .choose_move(&mut game, &SearchParams::default())
            .unwrap();

        assert_eq!(game, before);
        assert_eq!(output.best_move_uci.as_deref(), Some("d1d5"));
        assert_eq!(output.best_move_display, "d1xd5");
        assert_eq!(output.line.len(), 2);
        assert_eq!(output.line[0], "d1d5");
        assert_eq!(output.line_display.len(), output.line.len());
        assert_eq!(output.status, GameStatus::Ongoing);
        assert!(output.nodes > 1);
    }

    #[test]
    fn depth_override_controls_line_length() {
        let mut game = GameState::new_game();
        let mut engine = MinimaxEngine::new(2);

        let shallow = engine
            .choose_move(&mut game, &SearchParams { depth: Some(1) })
            .unwrap();
        let deeper = engine
            .choose_move(&mut game, &SearchParams { depth: Some(3) })
            .unwrap();

        assert_eq!(shallow.line.len(), 1);
        assert_eq!(deeper.line.len(), 3);
        assert!(deeper.nodes > shallow.nodes);
    }

    #[test]
    fn refuses_finished_games() {
        let mut mated = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        let mut stalemated = GameState::from_fen("k7/P7/1K6/8/8/8/8/8 b - - 0 1").unwrap();
        let mut engine = MinimaxEngine::new(2);

        assert!(matches!(
            engine.choose_move(&mut mated, &SearchParams::default()),
            Err(ChessError::GameOver(_))
        ));
        assert_eq!(
            engine.choose_move(&mut stalemated, &SearchParams::default()),
            Err(ChessError::GameOver("stalemate".to_owned()))
        );
    }

    #[test]
    fn serializes_report_as_json() {
        let mut game = GameState::new_game();
        let output = MinimaxEngine::new(1)
            .choose_move(&mut game, &SearchParams::default())
            .unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert!(json.get("best_move").is_none());
        assert_eq!(json["status"], "ongoing");
        assert_eq!(json["line"].as_array().map(Vec::len), Some(1));
        assert!(json["best_move_uci"].is_string());
    }
}

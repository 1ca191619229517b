use anyhow::{Context, Result};
use chess_assistant::engines::engine_minimax::MinimaxEngine;
use chess_assistant::engines::engine_trait::{Engine, SearchParams};
use chess_assistant::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_assistant::game_state::game_state::GameState;
use chess_assistant::search::minimax::SearchConfig;
use chess_assistant::utils::render_game_state::render_game_state;
use clap::Parser;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recommend a chess move for a position", long_about = None)]
struct Args {
    /// Position to analyse
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Search depth in plies
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    depth: u8,

    /// Coordinate moves played from the position before searching (e.g. e2e4)
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    moves: Vec<String>,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,

    /// Print the board before the recommendation
    #[arg(long)]
    board: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = GameState::from_fen(&args.fen).inspect_err(|err| warn!("rejected FEN: {err}"))?;

    for text in &args.moves {
        game.apply_long_algebraic(text)
            .inspect_err(|err| warn!("rejected move {text}: {err}"))
            .with_context(|| format!("while applying moves from {}", args.fen))?;
    }
    info!("searching {} at depth {}", game.get_fen(), args.depth);

    if args.board {
        println!("{}\n", render_game_state(&game));
    }

    let mut engine = MinimaxEngine::new(args.depth);
    let output = engine.choose_move(
        &mut game,
        &SearchParams {
            depth: Some(args.depth),
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("best move: {}", output.best_move_display);
        println!("score: {}", output.score);
        println!("line: {}", output.line_display.join(" "));
        println!("nodes: {}", output.nodes);
    }

    Ok(())
}

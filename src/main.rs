use std::process::ExitCode;

use checkers_core::{BoardConfig, Color, Game};
use checkers_engine::{CheckersAI, Heuristic, SearchConfig, Strategy};
use clap::Parser;
use log::{error, info};

/// Headless self-play: White searches with minimax, Black moves at random.
#[derive(Debug, Parser)]
#[command(name = "checkers", version)]
struct Args {
    /// Plies searched by the minimax player, clamped to 1..=10
    #[arg(long, default_value_t = 6)]
    depth: u8,

    /// Seed for the random player
    #[arg(long, default_value_t = 25)]
    seed: u64,

    #[arg(long, default_value_t = 8)]
    rows: usize,

    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Stop after this many plies even if nobody has won
    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    /// Leaf evaluation: material or positional
    #[arg(long, default_value_t = Heuristic::Positional)]
    heuristic: Heuristic,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let board_config = match BoardConfig::new(args.rows, args.cols) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let search_config = match SearchConfig::new(args.depth, args.seed, args.heuristic) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let white = CheckersAI::new(Color::White, Strategy::Minimax, search_config);
    let black = CheckersAI::new(Color::Black, Strategy::Random, search_config);
    let mut game = Game::new(board_config);
    for player in [&white, &black] {
        info!("{:?} plays {:?}", player.color(), player.strategy());
    }

    let mut plies = 0;
    while game.outcome().is_none() && plies < args.max_plies {
        let player = match game.turn() {
            Color::White => &white,
            Color::Black => &black,
        };
        let Some(mv) = player.get_move(game.board()) else {
            break;
        };
        if let Err(e) = game.play(&mv) {
            error!("{:?} produced an illegal move {}: {}", player.color(), mv, e);
            return ExitCode::FAILURE;
        }
        plies += 1;
    }

    println!("{}", game.board());
    match game.outcome() {
        Some(winner) => println!("{:?} wins after {} moves", winner, game.move_count()),
        None => println!("no winner after {plies} plies"),
    }
    info!(
        "final count: {} white, {} black",
        game.board().white_count(),
        game.board().black_count()
    );
    ExitCode::SUCCESS
}

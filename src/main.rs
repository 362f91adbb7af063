//! xo-match: MCTS (`O`) against Negamax (`X`) on the 4x4 board
//!
//! Every game runs on its own thread with its own engine.

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;

use xo::config::EngineConfig;
use xo::game::{play_game, GameRecord};
use xo::{AIEngine, GameResult, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// MCTS iterations per move
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Deepest negamax iteration
    #[arg(long)]
    max_depth: Option<u8>,

    /// Base seed; game `i` uses `seed + i`
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = build_config(&args)?;
    let games = config.r#match.games;
    log::info!(
        "playing {games} game(s): MCTS {} iterations vs negamax depth {}..={}",
        config.mcts.iterations,
        config.negamax.min_depth,
        config.negamax.max_depth
    );

    let records = thread::scope(|scope| {
        let handles: Vec<_> = (0..games)
            .map(|i| {
                let config = seeded_for_game(&config, args.seed, i);
                scope.spawn(move || {
                    let mut engine = AIEngine::with_config(config.clone());
                    play_game(&mut engine, &config.r#match)
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(i, handle)| match handle.join() {
                Ok(record) => record.with_context(|| format!("game {i} failed")),
                Err(_) => Err(anyhow::anyhow!("game {i} panicked")),
            })
            .collect::<Result<Vec<_>>>()
    })?;

    for (i, record) in records.iter().enumerate() {
        println!("Game {} ({} moves): {}", i + 1, record.moves.len(), describe(record));
        println!("{}\n", record.board);
    }
    print_tally(&records);
    Ok(())
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(games) = args.games {
        config = config.with_games(games);
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }
    Ok(config.validated())
}

fn seeded_for_game(config: &EngineConfig, seed: Option<u64>, game: u32) -> EngineConfig {
    match seed {
        Some(seed) => config.clone().with_seed(seed.wrapping_add(u64::from(game))),
        None => config.clone(),
    }
}

fn describe(record: &GameRecord) -> String {
    match record.result {
        GameResult::Won(Stone::O) => "O (MCTS) wins".to_string(),
        GameResult::Won(_) => "X (Negamax) wins".to_string(),
        GameResult::Draw => "draw".to_string(),
        GameResult::Ongoing => "unfinished".to_string(),
    }
}

fn print_tally(records: &[GameRecord]) {
    let count = |want: Option<Stone>| records.iter().filter(|r| r.winner() == want).count();
    let draws = records.iter().filter(|r| r.result == GameResult::Draw).count();
    println!(
        "MCTS {} / Negamax {} / draws {} / unfinished {}",
        count(Some(Stone::O)),
        count(Some(Stone::X)),
        draws,
        records.len() - count(Some(Stone::O)) - count(Some(Stone::X)) - draws
    );
}

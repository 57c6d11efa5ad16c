//! Batch simulator: the search plays both sides of many seeded games in parallel
//!
//! Useful for checking how the search depth and board settings in Game.toml
//! shift the balance between the player and the snakes.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use snakes_and_ladders::bot::Bot;
use snakes_and_ladders::config::Config;
use snakes_and_ladders::game::{Match, Outcome};
use snakes_and_ladders::session::autoplay;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Play seeded computer-vs-computer games and report results",
    long_about = None
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u64,
    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Override the configured search depth
    #[arg(long)]
    depth: Option<i32>,
    #[arg(long, default_value = "Game.toml")]
    config: PathBuf,
}

struct GameSummary {
    outcome: Outcome,
    turns: i32,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::from_file(&args.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", args.config.display(), e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });
    if let Some(depth) = args.depth {
        config.search.max_depth = depth;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("\n═══════════════════════════════════════════════════════════");
    println!("                 SELF-PLAY SIMULATION");
    println!("═══════════════════════════════════════════════════════════");
    println!("Games:          {}", args.games);
    println!("Board:          {}x{}", config.board.size, config.board.size);
    println!("Ladders/Snakes: {}/{}", config.board.ladders, config.board.snakes);
    println!("Turn Limit:     {}", config.rules.turn_limit);
    println!("Search Depth:   {}", config.search.max_depth);
    println!("Threads:        {}", rayon::current_num_threads());
    println!("═══════════════════════════════════════════════════════════\n");

    let start_time = Instant::now();
    let bot = Bot::new(config.clone());

    let results: Vec<Result<GameSummary, String>> = (0..args.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(args.seed + i);
            let mut game = Match::from_config(&config, &mut rng);
            let outcome = autoplay(&mut game, &bot).map_err(|e| format!("game {}: {}", i, e))?;
            Ok(GameSummary {
                outcome,
                turns: game.turn(),
            })
        })
        .collect();

    let mut summaries = Vec::new();
    for result in results {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    let victories = summaries.iter().filter(|s| s.outcome == Outcome::Victory).count();
    let defeats = summaries.len() - victories;
    let mean_turns = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.turns as f64).sum::<f64>() / summaries.len() as f64
    };
    let pct = |n: usize| {
        if summaries.is_empty() {
            0.0
        } else {
            n as f64 / summaries.len() as f64 * 100.0
        }
    };

    println!("Player Victories:   {} ({:.1}%)", victories, pct(victories));
    println!("Snake Victories:    {} ({:.1}%)", defeats, pct(defeats));
    println!("Mean Game Length:   {:.1} turns", mean_turns);
    println!("Total Time:         {:.1}s\n", start_time.elapsed().as_secs_f64());
}

// Standalone replay tool for turn logs written with debug logging enabled
//
// Usage:
//   cargo run --bin replay -- <log_file> --all [--verbose] [--config Game.toml]
//   cargo run --bin replay -- <log_file> --turns 3,4,5
//   cargo run --bin replay -- <log_file> --validate 0:8,2:15|16

use clap::Parser;
use std::path::PathBuf;
use std::process;

use snakes_and_ladders::config::Config;
use snakes_and_ladders::replay::ReplayEngine;
use snakes_and_ladders::types::Cell;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Re-run the search on logged turns and compare",
    long_about = None
)]
struct Args {
    /// JSONL turn log
    log_file: PathBuf,
    /// Replay all turns in the log
    #[arg(long, conflicts_with_all = ["turns", "validate"])]
    all: bool,
    /// Replay specific turns (comma-separated)
    #[arg(long, value_delimiter = ',')]
    turns: Option<Vec<i32>>,
    /// Expected player cells after the player's move (format: turn:cell|cell,...)
    #[arg(long, conflicts_with = "turns")]
    validate: Option<String>,
    /// Show detailed output for each turn
    #[arg(long)]
    verbose: bool,
    #[arg(long, default_value = "Game.toml")]
    config: PathBuf,
}

fn parse_expected_moves(s: &str) -> Result<Vec<(i32, Vec<Cell>)>, String> {
    s.split(',')
        .map(|pair| {
            let (turn, cells) = pair
                .trim()
                .split_once(':')
                .ok_or_else(|| format!("Invalid format '{}'. Expected 'turn:cell'", pair))?;

            let turn = turn
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", turn, e))?;

            // Support multiple acceptable cells separated by '|'
            let cells = cells
                .split('|')
                .map(|c| {
                    c.trim()
                        .parse::<Cell>()
                        .map_err(|e| format!("Invalid cell '{}': {}", c, e))
                })
                .collect::<Result<Vec<Cell>, String>>()?;

            Ok((turn, cells))
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if !args.all && args.turns.is_none() && args.validate.is_none() {
        eprintln!("Error: Must specify --all, --turns, or --validate");
        process::exit(1);
    }

    let config = Config::from_file(&args.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", args.config.display(), e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });

    println!("Loaded configuration from: {}", args.config.display());
    println!("Replay log file: {}", args.log_file.display());
    println!();

    let engine = ReplayEngine::new(config, args.verbose);

    let records = match engine.load_log_file(&args.log_file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if records.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", records.len());

    if let Some(validate) = &args.validate {
        let expected = match parse_expected_moves(validate) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error parsing expected moves: {}", e);
                process::exit(1);
            }
        };

        println!("Validating {} expected move(s)...\n", expected.len());
        match engine.validate_expected_moves(&records, &expected) {
            Ok(()) => println!("✓ All expected moves validated successfully!"),
            Err(e) => {
                eprintln!("✗ Validation failed: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let results = match &args.turns {
        Some(turns) => {
            println!("Replaying {} specific turn(s)...\n", turns.len());
            match engine.replay_turns(&records, turns) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("Error during replay: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            println!("Replaying all {} turns...\n", records.len());
            engine.replay_all(&records)
        }
    };

    engine.print_report(&results);
}

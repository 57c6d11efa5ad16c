use clap::{Parser, ValueEnum};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use std::process;

use snakes_and_ladders::bot::Bot;
use snakes_and_ladders::config::Config;
use snakes_and_ladders::controller::{ComputerAgent, HumanAgent, PlayerAgent};
use snakes_and_ladders::debug_logger::DebugLogger;
use snakes_and_ladders::game::{Match, Outcome};
use snakes_and_ladders::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Type the player's moves
    Human,
    /// The search plays both sides
    Auto,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Human)]
    mode: Mode,
    /// Path to Game.toml (falls back to built-in defaults if missing)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the board layout
    #[arg(long)]
    seed: Option<u64>,
}

async fn play<A: PlayerAgent>(game: Match, bot: Bot, agent: A, logger: DebugLogger) -> Outcome {
    let mut session = Session::new(game, bot, agent, logger).with_board_display(true);
    match session.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Game aborted: {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            error!("Could not load config from '{}': {}", path.display(), e);
            process::exit(1);
        }),
        None => Config::load_or_default(),
    };
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = Match::from_config(&config, &mut rng);
    let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path).await;
    let bot = Bot::new(config);

    info!("Starting Snakes and Ladders ({:?} mode)", args.mode);

    let outcome = match args.mode {
        Mode::Human => play(game, bot, HumanAgent::stdio(), logger).await,
        Mode::Auto => play(game, bot, ComputerAgent, logger).await,
    };

    println!("{}", outcome);
}

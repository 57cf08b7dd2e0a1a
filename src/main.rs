//! Archaemania: a two-player console duel.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use archaemania::{ArchaemaniaBuilder, GameConfig, GameRng, Session};

#[derive(Parser)]
#[command(author, version, about = "A two-player, turn-based console combat game", long_about = None)]
struct Cli {
    /// Seed for a reproducible game (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the rule constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the first player
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second player
    #[arg(long)]
    player2: Option<String>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the game on stdout.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let [first, second] = config.player_names.clone();
    config = config.with_player_names(cli.player1.unwrap_or(first), cli.player2.unwrap_or(second));

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "starting game");

    let (game, state) = ArchaemaniaBuilder::new().config(config).build_with_rng(rng)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(game, state, stdin.lock(), stdout.lock());
    let result = session.run()?;
    info!(winner = %result.winner(), turns = session.state().history().len(), "game finished");
    Ok(())
}

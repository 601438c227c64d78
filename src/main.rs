//! Conquest - Entry Point
//!
//! Registers the map from the terminal, assigns a secret mission and runs
//! the attack menu until the mission is fulfilled or the player quits.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use conquest::core::config::GameConfig;
use conquest::core::error::Result;
use conquest::mission::MissionId;
use conquest::ui::{self, Console, Ending};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Conquest - territory conquest console game
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(about = "Register territories, receive a secret mission and conquer the map")]
struct Args {
    /// Random seed for dice and mission (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force a mission instead of drawing one (conquer-one, conquer-three,
    /// conquer-all, eliminate-red, twenty-troops)
    #[arg(long)]
    mission: Option<MissionId>,

    /// Log every resolved attack to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, env.as_deref()))
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(ending) => {
            tracing::info!(?ending, "Game finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}. Exiting.", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` (or `conquest=warn`) with `-v` raising everything to debug on top
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = match env {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("conquest=warn"),
    };
    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn run(args: &Args) -> Result<Ending> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    tracing::debug!(seed, "Seeding session RNG");
    let rng = ChaCha8Rng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let mut session = ui::setup_session(&mut console, &config, args.mission, rng)?;
    ui::play(&mut console, &mut session)
}

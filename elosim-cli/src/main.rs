//! ELOSIM CLI - Command-line interface
//!
//! Commands:
//! - run: Simulate a round-robin tournament with Elo updates
//! - rate: Compute the rating change of a single hypothetical match

mod rate_cmd;
mod run_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "elosim")]
#[command(about = "Round-robin tournament simulator with Elo ratings")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every scheduled fixture and match
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a round-robin tournament
    Run(run_cmd::RunArgs),
    /// Rate a single match between two ratings
    Rate(rate_cmd::RateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => run_cmd::run(args, cli.seed),
        Commands::Rate(args) => rate_cmd::run(args),
    }
}

/// Install the fmt subscriber on stderr. RUST_LOG takes precedence.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

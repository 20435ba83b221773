//! Run command - simulate a full round-robin tournament
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 3: (delegated to elosim-tournament crate)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use elosim_core::{DEFAULT_K_FACTOR, DEFAULT_RATING};
use elosim_tournament::{
    run_tournament, RatingUpdateOrder, ShufflePolicy, TournamentConfig, TournamentReport,
    TracingLog, DEFAULT_DRAW_WEIGHT,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Number of players
    #[arg(long, default_value = "5")]
    pub players: usize,

    /// Number of round-robin rounds
    #[arg(long, default_value = "2")]
    pub rounds: usize,

    /// Starting rating for every player
    #[arg(long, default_value_t = DEFAULT_RATING)]
    pub initial_rating: f64,

    /// Elo K-factor
    #[arg(long, default_value_t = DEFAULT_K_FACTOR)]
    pub k_factor: u32,

    /// Relative weight of a draw when sampling outcomes
    #[arg(long, default_value_t = DEFAULT_DRAW_WEIGHT)]
    pub draw_weight: f64,

    /// Update player two first and rate player one against the new rating
    #[arg(long)]
    pub sequential_updates: bool,

    /// Shuffle the schedule once instead of before every match
    #[arg(long)]
    pub shuffle_once: bool,

    /// Tournament config JSON file (replaces the flags above)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tournament command
///
/// This function reads like a table of contents:
/// 1. Build the tournament configuration
/// 2. Play the tournament
/// 3. Report results
pub fn run(args: RunArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed)?;

    tracing::info!(
        "Starting tournament: {} players, {} rounds, {} games (k={}, seed={:?})",
        config.player_count,
        config.num_rounds,
        config.expected_games(),
        config.k_factor,
        config.seed
    );

    let report = run_tournament(&config, &TracingLog).context("Tournament failed")?;

    report_results(&report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the tournament configuration from a file or the command flags
fn build_config(args: &RunArgs, seed: Option<u64>) -> Result<TournamentConfig> {
    let mut config = match &args.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TournamentConfig {
            player_count: args.players,
            num_rounds: args.rounds,
            initial_rating: args.initial_rating,
            k_factor: args.k_factor,
            draw_weight: args.draw_weight,
            seed: None,
            update_order: if args.sequential_updates {
                RatingUpdateOrder::Sequential
            } else {
                RatingUpdateOrder::Simultaneous
            },
            shuffle: if args.shuffle_once {
                ShufflePolicy::Once
            } else {
                ShufflePolicy::EveryPop
            },
        },
    };

    if seed.is_some() {
        config.seed = seed;
    }

    config.validate().context("Invalid tournament configuration")?;
    Ok(config)
}

/// Report tournament results
fn report_results(report: &TournamentReport, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", output);
    } else {
        print!("{}", format_text_report(report));
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Format results as text
fn format_text_report(report: &TournamentReport) -> String {
    let mut out = format!("Final Rating after {} games:\n", report.games_played);
    for standing in &report.standings {
        out.push_str(&format!("  {} (Rating: {})\n", standing.name, standing.rating));
    }
    out.push_str(&format!(
        "Mean: {:.2}  Standard deviation: {:.2}\n",
        report.mean, report.std_dev
    ));
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use elosim_tournament::Standing;

    fn default_args() -> RunArgs {
        RunArgs {
            players: 5,
            rounds: 2,
            initial_rating: DEFAULT_RATING,
            k_factor: DEFAULT_K_FACTOR,
            draw_weight: DEFAULT_DRAW_WEIGHT,
            sequential_updates: false,
            shuffle_once: false,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_build_config_from_flags() {
        let args = RunArgs {
            players: 8,
            rounds: 3,
            sequential_updates: true,
            shuffle_once: true,
            ..default_args()
        };

        let config = build_config(&args, Some(42)).unwrap();
        assert_eq!(config.player_count, 8);
        assert_eq!(config.num_rounds, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.update_order, RatingUpdateOrder::Sequential);
        assert_eq!(config.shuffle, ShufflePolicy::Once);
    }

    #[test]
    fn test_build_config_defaults_match_library() {
        let config = build_config(&default_args(), None).unwrap();
        assert_eq!(config, TournamentConfig::default());
    }

    #[test]
    fn test_build_config_rejects_one_player() {
        let args = RunArgs {
            players: 1,
            ..default_args()
        };
        assert!(build_config(&args, None).is_err());
    }

    #[test]
    fn test_build_config_from_file_with_seed_override() {
        let path = std::env::temp_dir().join(format!("elosim-run-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"player_count": 3, "num_rounds": 4, "seed": 1}"#).unwrap();

        let args = RunArgs {
            config: Some(path.clone()),
            ..default_args()
        };
        let config = build_config(&args, Some(77));
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.player_count, 3);
        assert_eq!(config.num_rounds, 4);
        assert_eq!(config.seed, Some(77));
    }

    #[test]
    fn test_build_config_missing_file() {
        let args = RunArgs {
            config: Some(PathBuf::from("/nonexistent/elosim.json")),
            ..default_args()
        };
        let err = build_config(&args, None).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_format_text_report() {
        let report = TournamentReport {
            games_played: 2,
            standings: vec![
                Standing {
                    index: 0,
                    name: "Player 1".into(),
                    rating: 1216.0,
                },
                Standing {
                    index: 1,
                    name: "Player 2".into(),
                    rating: 1184.0,
                },
            ],
            mean: 1200.0,
            std_dev: 22.627417,
        };

        let text = format_text_report(&report);
        assert_eq!(
            text,
            "Final Rating after 2 games:\n  Player 1 (Rating: 1216)\n  Player 2 (Rating: 1184)\nMean: 1200.00  Standard deviation: 22.63\n"
        );
    }
}

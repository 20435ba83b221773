//! ELOSIM Tournament - Round-robin simulation with Elo tracking
//!
//! This crate provides tournament infrastructure:
//! - Round-robin schedule generation with repeated rounds
//! - Probabilistic match simulation weighted by expected score
//! - Sequential rating updates driven by a tournament controller
//! - Summary reporting (mean and standard deviation of ratings)
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_tournament (orchestration)
//! - Level 2: Tournament::play, play_next_match (phases)
//! - Level 3: Schedule, MatchSimulator, TournamentReport (steps)
//! - Level 4: configuration, errors, log sink

mod config;
mod error;
mod log;
mod report;
mod schedule;
mod simulator;
mod tournament;

pub use config::{RatingUpdateOrder, ShufflePolicy, TournamentConfig};
pub use error::{Result, TournamentError};
pub use log::{MatchLog, MemoryLog, TracingLog};
pub use report::{mean, sample_std_dev, Standing, TournamentReport};
pub use schedule::{round_robin_pairs, Fixture, Schedule};
pub use simulator::{MatchSimulator, DEFAULT_DRAW_WEIGHT};
pub use tournament::{create_rng, run_tournament, MatchRecord, Tournament, TournamentState};

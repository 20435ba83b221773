//! Error types for tournament setup, play and reporting

use std::path::PathBuf;

use rand::distributions::WeightedError;

/// Errors raised while configuring, playing or summarising a tournament
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("a tournament needs at least 2 players, got {count}")]
    TooFewPlayers { count: usize },

    #[error("standard deviation needs at least 2 ratings, got {count}")]
    TooFewSamples { count: usize },

    #[error("draw weight must be finite and non-negative, got {0}")]
    InvalidDrawWeight(f64),

    #[error("rating must be finite, got {0}")]
    InvalidRating(f64),

    #[error("outcome sampling failed: {0}")]
    Sampling(#[from] WeightedError),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TournamentError>;

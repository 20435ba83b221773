//! Final standings and rating statistics
//!
//! Level 3 - Steps

use elosim_core::Player;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::log::MatchLog;

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_std_dev(values: &[f64]) -> Result<f64> {
    let n = values.len();
    let avg = match mean(values) {
        Some(avg) if n >= 2 => avg,
        _ => return Err(TournamentError::TooFewSamples { count: n }),
    };
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Ok((sum_sq / (n - 1) as f64).sqrt())
}

/// Final rating of one participant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Index of the player in the registry
    pub index: usize,
    pub name: String,
    pub rating: f64,
}

/// Summary of a finished tournament
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub games_played: usize,
    /// Final ratings in registry order
    pub standings: Vec<Standing>,
    pub mean: f64,
    pub std_dev: f64,
}

impl TournamentReport {
    /// Summarise final player ratings. Needs at least two players.
    pub fn from_players(players: &[Player], games_played: usize) -> Result<Self> {
        let ratings: Vec<f64> = players.iter().map(|p| p.rating).collect();
        let std_dev = sample_std_dev(&ratings)?;
        let mean = mean(&ratings).ok_or(TournamentError::TooFewSamples { count: 0 })?;

        let standings = players
            .iter()
            .enumerate()
            .map(|(index, p)| Standing {
                index,
                name: p.name.clone(),
                rating: p.rating,
            })
            .collect();

        Ok(Self {
            games_played,
            standings,
            mean,
            std_dev,
        })
    }

    /// Standings sorted by rating, highest first
    pub fn leaderboard(&self) -> Vec<&Standing> {
        let mut entries: Vec<&Standing> = self.standings.iter().collect();
        entries.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// Emit the summary: game count and statistics at info, players at debug
    pub fn emit(&self, log: &dyn MatchLog) {
        log.info(&format!("Final Rating after {} games:", self.games_played));
        for standing in &self.standings {
            log.debug(&format!("{} (Rating: {})", standing.name, standing.rating));
        }
        log.info(&format!(
            "Mean - {}; Standard Deviation - {}",
            self.mean, self.std_dev
        ));
    }
}

//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use std::path::Path;

use elosim_core::{DEFAULT_K_FACTOR, DEFAULT_RATING};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::simulator::DEFAULT_DRAW_WEIGHT;

/// How the two rating updates of a match see each other
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingUpdateOrder {
    /// Both players are rated against the other's pre-match rating
    #[default]
    Simultaneous,
    /// Player two is updated first; player one is then rated against
    /// player two's updated rating
    Sequential,
}

/// When the remaining schedule is shuffled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Reshuffle the remaining fixtures before every match
    #[default]
    EveryPop,
    /// Shuffle once at creation, then play fixtures in order
    Once,
}

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of participants
    pub player_count: usize,
    /// Times every ordered pairing is played
    pub num_rounds: usize,
    /// Starting rating for every participant
    pub initial_rating: f64,
    /// Elo K-factor
    pub k_factor: u32,
    /// Relative weight of a draw when sampling outcomes
    pub draw_weight: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    pub update_order: RatingUpdateOrder,
    pub shuffle: ShufflePolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            player_count: 5,
            num_rounds: 2,
            initial_rating: DEFAULT_RATING,
            k_factor: DEFAULT_K_FACTOR,
            draw_weight: DEFAULT_DRAW_WEIGHT,
            seed: None,
            update_order: RatingUpdateOrder::default(),
            shuffle: ShufflePolicy::default(),
        }
    }
}

impl TournamentConfig {
    /// Create round-robin config for `player_count` players over `num_rounds`
    pub fn round_robin(player_count: usize, num_rounds: usize) -> Self {
        Self {
            player_count,
            num_rounds,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_rating(mut self, rating: f64) -> Self {
        self.initial_rating = rating;
        self
    }

    pub fn with_k_factor(mut self, k_factor: u32) -> Self {
        self.k_factor = k_factor;
        self
    }

    pub fn with_draw_weight(mut self, draw_weight: f64) -> Self {
        self.draw_weight = draw_weight;
        self
    }

    pub fn with_update_order(mut self, order: RatingUpdateOrder) -> Self {
        self.update_order = order;
        self
    }

    pub fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Games a full tournament with this config plays
    pub fn expected_games(&self) -> usize {
        self.player_count * self.player_count.saturating_sub(1) * self.num_rounds
    }

    /// Check the config describes a playable tournament
    pub fn validate(&self) -> Result<()> {
        if self.player_count < 2 {
            return Err(TournamentError::TooFewPlayers {
                count: self.player_count,
            });
        }
        if !self.initial_rating.is_finite() {
            return Err(TournamentError::InvalidRating(self.initial_rating));
        }
        if !self.draw_weight.is_finite() || self.draw_weight < 0.0 {
            return Err(TournamentError::InvalidDrawWeight(self.draw_weight));
        }
        Ok(())
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| TournamentError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.player_count, 5);
        assert_eq!(config.num_rounds, 2);
        assert_eq!(config.initial_rating, 1200.0);
        assert_eq!(config.k_factor, 32);
        assert_eq!(config.draw_weight, 0.3);
        assert_eq!(config.seed, None);
        assert_eq!(config.update_order, RatingUpdateOrder::Simultaneous);
        assert_eq!(config.shuffle, ShufflePolicy::EveryPop);
    }

    #[test]
    fn test_round_robin_builder() {
        let config = TournamentConfig::round_robin(8, 3)
            .with_seed(7)
            .with_k_factor(16)
            .with_update_order(RatingUpdateOrder::Sequential);
        assert_eq!(config.player_count, 8);
        assert_eq!(config.num_rounds, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.k_factor, 16);
        assert_eq!(config.update_order, RatingUpdateOrder::Sequential);
    }

    #[test]
    fn test_expected_games() {
        assert_eq!(TournamentConfig::round_robin(5, 2).expected_games(), 40);
        assert_eq!(TournamentConfig::round_robin(2, 1).expected_games(), 2);
        assert_eq!(TournamentConfig::round_robin(0, 3).expected_games(), 0);
    }

    #[test]
    fn test_validate_rejects_too_few_players() {
        for count in [0, 1] {
            let err = TournamentConfig::round_robin(count, 1).validate().unwrap_err();
            assert!(matches!(err, TournamentError::TooFewPlayers { count: c } if c == count));
        }
        assert!(TournamentConfig::round_robin(2, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let config = TournamentConfig::default().with_draw_weight(-0.1);
        assert!(matches!(config.validate(), Err(TournamentError::InvalidDrawWeight(_))));

        let config = TournamentConfig::default().with_draw_weight(f64::NAN);
        assert!(matches!(config.validate(), Err(TournamentError::InvalidDrawWeight(_))));

        let config = TournamentConfig::default().with_initial_rating(f64::INFINITY);
        assert!(matches!(config.validate(), Err(TournamentError::InvalidRating(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = TournamentConfig::from_json(
            r#"{"player_count": 4, "seed": 99, "update_order": "sequential", "shuffle": "once"}"#,
        )
        .unwrap();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.num_rounds, 2);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.update_order, RatingUpdateOrder::Sequential);
        assert_eq!(config.shuffle, ShufflePolicy::Once);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TournamentConfig::load("/nonexistent/elosim.json").unwrap_err();
        assert!(matches!(err, TournamentError::ConfigIo { .. }));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let config = TournamentConfig::round_robin(6, 1).with_seed(3);
        let path = std::env::temp_dir().join(format!("elosim-config-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = TournamentConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}

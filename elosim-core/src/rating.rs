//! Elo rating engine
//!
//! Expected score follows the logistic curve with a 400 point scale:
//! a 400 point advantage means 10:1 odds.

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::result::MatchResult;

/// K-factor used when none is configured
pub const DEFAULT_K_FACTOR: u32 = 32;

/// Expected score of a player rated `rating` against `opponent_rating`
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent_rating - rating) / 400.0))
}

/// Round a rating to two decimal places
pub fn round_rating(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}

/// Elo rating engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EloRating {
    k: u32,
}

impl Default for EloRating {
    fn default() -> Self {
        Self::new(DEFAULT_K_FACTOR)
    }
}

impl EloRating {
    pub fn new(k: u32) -> Self {
        Self { k }
    }

    pub fn k_factor(&self) -> u32 {
        self.k
    }

    /// Expected score for `rating` against `opponent_rating`
    pub fn expected_score(&self, rating: f64, opponent_rating: f64) -> f64 {
        expected_score(rating, opponent_rating)
    }

    /// New rating after scoring `result` against an opponent, rounded
    pub fn updated_rating(&self, rating: f64, opponent_rating: f64, result: MatchResult) -> f64 {
        let expected = self.expected_score(rating, opponent_rating);
        round_rating(rating + f64::from(self.k) * (result.score() - expected))
    }

    /// Apply `result` to `player`. The opponent is only read.
    pub fn update_rating(&self, player: &mut Player, opponent: &Player, result: MatchResult) {
        player.rating = self.updated_rating(player.rating, opponent.rating, result);
    }
}

//! Match simulation - outcome drawn from Elo expected score
//!
//! Level 3 - Steps

use elosim_core::{EloRating, MatchResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::Result;

/// Relative weight of a draw unless configured otherwise
pub const DEFAULT_DRAW_WEIGHT: f64 = 0.3;

/// Draws match outcomes from two players' ratings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchSimulator {
    elo: EloRating,
    draw_weight: f64,
}

impl Default for MatchSimulator {
    fn default() -> Self {
        Self::new(EloRating::default(), DEFAULT_DRAW_WEIGHT)
    }
}

impl MatchSimulator {
    pub fn new(elo: EloRating, draw_weight: f64) -> Self {
        Self { elo, draw_weight }
    }

    pub fn draw_weight(&self) -> f64 {
        self.draw_weight
    }

    /// Sampling weights for [Win, Draw, Loss] from player one's side
    pub fn weights(&self, first_rating: f64, second_rating: f64) -> [f64; 3] {
        let expected = self.elo.expected_score(first_rating, second_rating);
        [expected, self.draw_weight, 1.0 - expected]
    }

    /// Simulate one match, returning (player one result, player two result)
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        first_rating: f64,
        second_rating: f64,
        rng: &mut R,
    ) -> Result<(MatchResult, MatchResult)> {
        let dist = WeightedIndex::new(self.weights(first_rating, second_rating))?;
        let outcome = MatchResult::ALL[dist.sample(rng)];
        Ok(outcome.paired())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TournamentError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tally(
        sim: &MatchSimulator,
        first: f64,
        second: f64,
        games: usize,
        seed: u64,
    ) -> (usize, usize, usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (mut wins, mut draws, mut losses) = (0, 0, 0);
        for _ in 0..games {
            match sim.simulate(first, second, &mut rng).unwrap().0 {
                MatchResult::Win => wins += 1,
                MatchResult::Draw => draws += 1,
                MatchResult::Loss => losses += 1,
            }
        }
        (wins, draws, losses)
    }

    #[test]
    fn test_weights() {
        let sim = MatchSimulator::default();
        let [win, draw, loss] = sim.weights(1200.0, 1200.0);
        assert_eq!(win, 0.5);
        assert_eq!(draw, 0.3);
        assert_eq!(loss, 0.5);

        let [win, _, loss] = sim.weights(1400.0, 1200.0);
        assert!((win - 0.7597).abs() < 1e-4);
        assert!((win + loss - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_results_are_complementary() {
        let sim = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let (one, two) = sim.simulate(1350.0, 1280.0, &mut rng).unwrap();
            match one {
                MatchResult::Draw => assert_eq!(two, MatchResult::Draw),
                MatchResult::Win => assert_eq!(two, MatchResult::Loss),
                MatchResult::Loss => assert_eq!(two, MatchResult::Win),
            }
        }
    }

    #[test]
    fn test_draw_rate_tracks_weight() {
        let sim = MatchSimulator::default();
        let games = 4000;
        let (wins, draws, losses) = tally(&sim, 1200.0, 1200.0, games, 7);

        // 0.3 / 1.3 of games should be draws
        let draw_rate = draws as f64 / games as f64;
        assert!((draw_rate - 0.3 / 1.3).abs() < 0.05, "draw rate {}", draw_rate);
        assert_eq!(wins + draws + losses, games);
    }

    #[test]
    fn test_no_draws_when_weight_zero() {
        let sim = MatchSimulator::new(EloRating::default(), 0.0);
        let (_, draws, _) = tally(&sim, 1200.0, 1300.0, 1000, 11);
        assert_eq!(draws, 0);
    }

    #[test]
    fn test_stronger_player_wins_more() {
        let sim = MatchSimulator::default();
        let (wins, _, losses) = tally(&sim, 1600.0, 1200.0, 2000, 3);
        assert!(wins > losses * 3, "wins={} losses={}", wins, losses);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let sim = MatchSimulator::default();
        assert_eq!(tally(&sim, 1250.0, 1190.0, 300, 99), tally(&sim, 1250.0, 1190.0, 300, 99));
    }

    #[test]
    fn test_negative_draw_weight_is_an_error() {
        let sim = MatchSimulator::new(EloRating::default(), -1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = sim.simulate(1200.0, 1200.0, &mut rng).unwrap_err();
        assert!(matches!(err, TournamentError::Sampling(_)));
    }
}

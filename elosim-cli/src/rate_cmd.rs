//! Rate command - rating change of a single match
//!
//! Both players are rated against each other's pre-match rating.

use anyhow::Result;
use clap::{Args, ValueEnum};

use elosim_core::{EloRating, MatchResult, DEFAULT_K_FACTOR};

#[derive(Args)]
pub struct RateArgs {
    /// Rating of player A
    #[arg(long)]
    pub rating_a: f64,

    /// Rating of player B
    #[arg(long)]
    pub rating_b: f64,

    /// Result from player A's side
    #[arg(long, value_enum)]
    pub result: ResultArg,

    /// Elo K-factor
    #[arg(long, default_value_t = DEFAULT_K_FACTOR)]
    pub k_factor: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResultArg {
    Win,
    Draw,
    Loss,
}

impl From<ResultArg> for MatchResult {
    fn from(arg: ResultArg) -> Self {
        match arg {
            ResultArg::Win => MatchResult::Win,
            ResultArg::Draw => MatchResult::Draw,
            ResultArg::Loss => MatchResult::Loss,
        }
    }
}

/// Outcome of rating one match
#[derive(Clone, Copy, Debug, PartialEq)]
struct RatedMatch {
    expected_a: f64,
    new_a: f64,
    new_b: f64,
}

pub fn run(args: RateArgs) -> Result<()> {
    if !args.rating_a.is_finite() || !args.rating_b.is_finite() {
        anyhow::bail!("Ratings must be finite numbers");
    }

    let result = MatchResult::from(args.result);
    let rated = rate_match(args.rating_a, args.rating_b, result, args.k_factor);

    println!("Expected score A: {:.4}", rated.expected_a);
    println!("Expected score B: {:.4}", 1.0 - rated.expected_a);
    println!("A: {} -> {} ({})", args.rating_a, rated.new_a, result);
    println!("B: {} -> {} ({})", args.rating_b, rated.new_b, result.opposite());

    Ok(())
}

fn rate_match(rating_a: f64, rating_b: f64, result: MatchResult, k_factor: u32) -> RatedMatch {
    let elo = EloRating::new(k_factor);
    RatedMatch {
        expected_a: elo.expected_score(rating_a, rating_b),
        new_a: elo.updated_rating(rating_a, rating_b, result),
        new_b: elo.updated_rating(rating_b, rating_a, result.opposite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_match_favourite_wins() {
        let rated = rate_match(1400.0, 1200.0, MatchResult::Win, 32);
        assert!((rated.expected_a - 0.7597).abs() < 1e-4);
        assert_eq!(rated.new_a, 1407.69);
        assert_eq!(rated.new_b, 1192.31);
    }

    #[test]
    fn test_rate_match_draw_between_equals() {
        let rated = rate_match(1200.0, 1200.0, MatchResult::Draw, 32);
        assert_eq!(rated.expected_a, 0.5);
        assert_eq!((rated.new_a, rated.new_b), (1200.0, 1200.0));
    }

    #[test]
    fn test_result_arg_conversion() {
        assert_eq!(MatchResult::from(ResultArg::Loss), MatchResult::Loss);
        assert_eq!(MatchResult::from(ResultArg::Draw), MatchResult::Draw);
    }
}

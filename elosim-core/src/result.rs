//! MatchResult - outcome of a single match from one player's side

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a match for one participant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// All outcomes, in sampling order
    pub const ALL: [MatchResult; 3] = [MatchResult::Win, MatchResult::Draw, MatchResult::Loss];

    /// Score contribution used by the rating update
    /// Wins = 1.0, Draws = 0.5, Losses = 0.0
    pub fn score(self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }

    /// Result for the other participant of the same match
    pub fn opposite(self) -> MatchResult {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Draw => MatchResult::Draw,
            MatchResult::Loss => MatchResult::Win,
        }
    }

    /// Both sides of a match, player one's result first
    pub fn paired(self) -> (MatchResult, MatchResult) {
        (self, self.opposite())
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchResult::Win => "WIN",
            MatchResult::Draw => "DRAW",
            MatchResult::Loss => "LOSS",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

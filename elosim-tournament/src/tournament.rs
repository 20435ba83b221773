//! Tournament execution - schedule, simulate, rate
//!
//! Level 1 - Orchestration and Level 2 - Phases

use elosim_core::{EloRating, MatchResult, Player, PlayerRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{RatingUpdateOrder, TournamentConfig};
use crate::error::{Result, TournamentError};
use crate::log::MatchLog;
use crate::report::TournamentReport;
use crate::schedule::{Fixture, Schedule};
use crate::simulator::MatchSimulator;

/// Lifecycle of a tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentState {
    /// Schedule built, nothing played yet
    Scheduled,
    /// At least one match played, fixtures remain
    Playing,
    /// Schedule exhausted
    Finished,
}

/// One played match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based position in the tournament
    pub match_number: usize,
    pub fixture: Fixture,
    pub first_name: String,
    pub second_name: String,
    /// Ratings before the match (player one, player two)
    pub ratings_before: (f64, f64),
    /// Results (player one, player two)
    pub results: (MatchResult, MatchResult),
    /// Ratings after the match (player one, player two)
    pub ratings_after: (f64, f64),
}

/// Round-robin tournament over a player registry
pub struct Tournament<'a> {
    players: PlayerRegistry,
    schedule: Schedule,
    config: TournamentConfig,
    elo: EloRating,
    simulator: MatchSimulator,
    rng: ChaCha8Rng,
    log: &'a dyn MatchLog,
    state: TournamentState,
    history: Vec<MatchRecord>,
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run a full tournament with default-named players (Level 1 orchestration)
///
/// # Arguments
/// * `config` - Tournament configuration
/// * `log` - Sink for per-match and summary records
///
/// # Returns
/// Report with final ratings and rating statistics
pub fn run_tournament(config: &TournamentConfig, log: &dyn MatchLog) -> Result<TournamentReport> {
    config.validate()?;
    let players = PlayerRegistry::with_default_names(config.player_count, config.initial_rating);
    let mut tournament = Tournament::new(players, config.clone(), log)?;
    tournament.play()
}

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl<'a> Tournament<'a> {
    /// Build the schedule for `players`
    ///
    /// The registry decides who plays; `config.player_count` and
    /// `config.initial_rating` are not consulted here.
    pub fn new(
        players: PlayerRegistry,
        config: TournamentConfig,
        log: &'a dyn MatchLog,
    ) -> Result<Self> {
        let rng = create_rng(config.seed);
        Self::with_rng(players, config, log, rng)
    }

    /// Same as `new`, with an explicit random source
    pub fn with_rng(
        players: PlayerRegistry,
        config: TournamentConfig,
        log: &'a dyn MatchLog,
        mut rng: ChaCha8Rng,
    ) -> Result<Self> {
        TournamentConfig {
            player_count: players.len(),
            ..config.clone()
        }
        .validate()?;
        if let Some(bad) = players.iter().find(|p| !p.rating.is_finite()) {
            return Err(TournamentError::InvalidRating(bad.rating));
        }

        let mut schedule = Schedule::ordered(players.len(), config.num_rounds);
        log.debug(&format!("Schedule: {}", schedule));
        schedule.shuffle(&mut rng);

        let elo = EloRating::new(config.k_factor);
        let simulator = MatchSimulator::new(elo, config.draw_weight);

        Ok(Self {
            players,
            schedule,
            config,
            elo,
            simulator,
            rng,
            log,
            state: TournamentState::Scheduled,
            history: Vec::new(),
        })
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Play every remaining fixture and summarise
    pub fn play(&mut self) -> Result<TournamentReport> {
        while self.play_next_match()?.is_some() {}
        self.report()
    }

    /// Play one fixture. Returns `None` once the schedule is exhausted.
    pub fn play_next_match(&mut self) -> Result<Option<MatchRecord>> {
        let fixture = match self.schedule.next_fixture(self.config.shuffle, &mut self.rng) {
            Some(fixture) => fixture,
            None => {
                self.state = TournamentState::Finished;
                return Ok(None);
            }
        };
        self.state = TournamentState::Playing;

        let match_number = self.history.len() + 1;
        self.log.debug(&format!("Match {}", match_number));

        let record = self.play_fixture(fixture, match_number)?;

        self.log.debug(&format!(
            "Result: {} vs {}",
            record.results.0, record.results.1
        ));
        self.log.debug(&format!(
            "Updated Ratings: {} ({}), {} ({})",
            record.first_name, record.ratings_after.0, record.second_name, record.ratings_after.1
        ));

        if self.schedule.is_empty() {
            self.state = TournamentState::Finished;
        }

        self.history.push(record.clone());
        Ok(Some(record))
    }

    /// Summary of the current ratings
    pub fn report(&self) -> Result<TournamentReport> {
        let report = TournamentReport::from_players(self.players.as_slice(), self.history.len())?;
        report.emit(self.log);
        Ok(report)
    }

    // ========================================================================
    // Level 3 - Steps
    // ========================================================================

    /// Simulate a fixture and apply both rating updates
    fn play_fixture(&mut self, fixture: Fixture, match_number: usize) -> Result<MatchRecord> {
        let count = self.players.len();
        let (first, second) = self
            .players
            .pair_mut(fixture.first, fixture.second)
            .ok_or(TournamentError::TooFewPlayers { count })?;

        let ratings_before = (first.rating, second.rating);
        let results = self
            .simulator
            .simulate(first.rating, second.rating, &mut self.rng)?;

        self.log.debug(&format!(
            "Match: {} ({}) vs {} ({})",
            first.name, first.rating, second.name, second.rating
        ));

        apply_results(&self.elo, self.config.update_order, first, second, results);

        Ok(MatchRecord {
            match_number,
            fixture,
            first_name: first.name.clone(),
            second_name: second.name.clone(),
            ratings_before,
            results,
            ratings_after: (first.rating, second.rating),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> TournamentState {
        self.state
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn into_players(self) -> PlayerRegistry {
        self.players
    }

    /// Fixtures not yet played
    pub fn remaining(&self) -> usize {
        self.schedule.len()
    }

    pub fn matches_played(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }
}

/// Apply both players' results under the given update order
fn apply_results(
    elo: &EloRating,
    order: RatingUpdateOrder,
    first: &mut Player,
    second: &mut Player,
    results: (MatchResult, MatchResult),
) {
    match order {
        RatingUpdateOrder::Simultaneous => {
            let (r1, r2) = (first.rating, second.rating);
            first.rating = elo.updated_rating(r1, r2, results.0);
            second.rating = elo.updated_rating(r2, r1, results.1);
        }
        RatingUpdateOrder::Sequential => {
            elo.update_rating(second, first, results.1);
            elo.update_rating(first, second, results.0);
        }
    }
}

//! Schedule generation - round-robin fixtures with repeated rounds
//!
//! Level 3 - Steps

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ShufflePolicy;

/// One scheduled pairing, as indices into the player registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    /// Player one
    pub first: usize,
    /// Player two
    pub second: usize,
}

impl Fixture {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Same pairing with roles swapped
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Generate one round of pairings: (i, j) then (j, i) for every i < j
pub fn round_robin_pairs(n: usize) -> Vec<Fixture> {
    let mut pairings = Vec::with_capacity(n * n.saturating_sub(1));
    for i in 0..n {
        for j in (i + 1)..n {
            let fixture = Fixture::new(i, j);
            pairings.push(fixture);
            pairings.push(fixture.reversed());
        }
    }
    pairings
}

/// Remaining fixtures of a tournament, consumed from the end
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    fixtures: Vec<Fixture>,
}

impl Schedule {
    /// Unshuffled schedule: the round-robin pairs repeated `rounds` times
    pub fn ordered(n: usize, rounds: usize) -> Self {
        let pairs = round_robin_pairs(n);
        let mut fixtures = Vec::with_capacity(pairs.len() * rounds);
        for _ in 0..rounds {
            fixtures.extend_from_slice(&pairs);
        }
        Self { fixtures }
    }

    /// Shuffled round-robin schedule for `n` players over `rounds`
    pub fn round_robin<R: Rng + ?Sized>(n: usize, rounds: usize, rng: &mut R) -> Self {
        let mut schedule = Self::ordered(n, rounds);
        schedule.shuffle(rng);
        schedule
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fixtures.shuffle(rng);
    }

    /// Take the next fixture, reshuffling first under `ShufflePolicy::EveryPop`
    pub fn next_fixture<R: Rng + ?Sized>(
        &mut self,
        policy: ShufflePolicy,
        rng: &mut R,
    ) -> Option<Fixture> {
        if policy == ShufflePolicy::EveryPop {
            self.shuffle(rng);
        }
        self.fixtures.pop()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }
}

impl From<Vec<Fixture>> for Schedule {
    fn from(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, fixture) in self.fixtures.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", fixture)?;
        }
        f.write_str("]")
    }
}

//! Players and the ordered registry fixtures index into

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting rating for players without an explicit one
pub const DEFAULT_RATING: f64 = 1200.0;

/// Tournament participant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: f64,
}

impl Player {
    /// Create a player at the default rating
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rating(name, DEFAULT_RATING)
    }

    pub fn with_rating(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Rating: {})", self.name, self.rating)
    }
}

/// Ordered collection of players
///
/// Positions are stable for the lifetime of the registry; schedules refer to
/// players by index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Create `count` players named "Player 1".."Player N" at the given rating
    pub fn with_default_names(count: usize, initial_rating: f64) -> Self {
        let players = (0..count)
            .map(|i| Player::with_rating(format!("Player {}", i + 1), initial_rating))
            .collect();
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Mutable access to two distinct players at once
    ///
    /// Returns `None` if either index is out of range or both are equal.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Player, &mut Player)> {
        if first == second || first >= self.players.len() || second >= self.players.len() {
            return None;
        }

        if first < second {
            let (left, right) = self.players.split_at_mut(second);
            Some((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(first);
            Some((&mut right[0], &mut left[second]))
        }
    }

    /// Current ratings in registry order
    pub fn ratings(&self) -> Vec<f64> {
        self.players.iter().map(|p| p.rating).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

impl From<Vec<Player>> for PlayerRegistry {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl<'a> IntoIterator for &'a PlayerRegistry {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

//! ELOSIM Core - Elo rating engine and player state
//!
//! This crate provides the pieces every tournament is built from:
//! - Match results and their score values
//! - Players and the ordered player registry
//! - The Elo rating engine (expected score and rating updates)

pub mod player;
pub mod rating;
pub mod result;

// Re-exports for convenient access
pub use player::{Player, PlayerRegistry, DEFAULT_RATING};
pub use rating::{expected_score, round_rating, EloRating, DEFAULT_K_FACTOR};
pub use result::MatchResult;

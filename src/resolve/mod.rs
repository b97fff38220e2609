//! Matchup resolution.
//!
//! Resolves a single paired comparison between two groups into a win,
//! draw, or loss for the own side, and tallies results over a pairing.

pub mod matchup;

pub use matchup::{compare, compare_with, pairwise, MatchupResult, Tally};

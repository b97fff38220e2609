//! Arrangement search.
//!
//! Enumerates orderings of one force against the fixed order of the other
//! and returns the first ordering that wins a strict majority of matchups.

pub mod arrangement;
pub mod permutation;

pub use arrangement::{
    search, search_with, Arrangement, Pairing, SearchConfig, SearchOutcome, SearchStats, Verdict,
};
pub use permutation::{factorial, next_permutation, Permutations};

//! Head-to-head matchup evaluation.
//!
//! Each side's effective strength is computed independently, so both
//! sides may hold an advantage over the other, or neither may.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{AdvantageRules, Group, STANDARD_RULES};

/// Result of one paired comparison, from the own side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchupResult {
    Win,
    Draw,
    Loss,
}

impl MatchupResult {
    pub const fn name(self) -> &'static str {
        match self {
            MatchupResult::Win => "Win",
            MatchupResult::Draw => "Draw",
            MatchupResult::Loss => "Loss",
        }
    }
}

impl fmt::Display for MatchupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compares `own` against `opponent` under the standard table.
pub fn compare(own: &Group, opponent: &Group) -> MatchupResult {
    compare_with(own, opponent, &STANDARD_RULES)
}

/// Compares `own` against `opponent` under `rules`.
#[inline]
pub fn compare_with(own: &Group, opponent: &Group, rules: &AdvantageRules) -> MatchupResult {
    let own_strength = own.effective_strength_with(opponent, rules);
    let opp_strength = opponent.effective_strength_with(own, rules);
    match own_strength.cmp(&opp_strength) {
        Ordering::Greater => MatchupResult::Win,
        Ordering::Equal => MatchupResult::Draw,
        Ordering::Less => MatchupResult::Loss,
    }
}

/// Win/draw/loss counts over a set of matchups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, result: MatchupResult) {
        match result {
            MatchupResult::Win => self.wins += 1,
            MatchupResult::Draw => self.draws += 1,
            MatchupResult::Loss => self.losses += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

impl FromIterator<MatchupResult> for Tally {
    fn from_iter<I: IntoIterator<Item = MatchupResult>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for result in iter {
            tally.record(result);
        }
        tally
    }
}

/// Evaluates groups pairwise by position, stopping at the shorter side.
pub fn pairwise<'a, I>(
    own: I,
    opponent: &'a [Group],
    rules: &'a AdvantageRules,
) -> impl Iterator<Item = MatchupResult> + 'a
where
    I: IntoIterator<Item = &'a Group>,
    I::IntoIter: 'a,
{
    own.into_iter()
        .zip(opponent)
        .map(move |(a, b)| compare_with(a, b, rules))
}

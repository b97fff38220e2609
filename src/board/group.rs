//! Troop groups.
//!
//! A group is a unit class plus a positive head count. Its effective
//! strength depends on the group it faces.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::class::{AdvantageRules, UnitClass, STANDARD_RULES};

/// Errors raised when constructing a group.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    #[error("{0} group has a count of zero")]
    ZeroCount(UnitClass),
}

/// A group of troops of a single class.
///
/// Immutable once constructed; `count` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    class: UnitClass,
    count: u32,
}

impl Group {
    /// Creates a group, rejecting a zero count.
    pub fn new(class: UnitClass, count: u32) -> Result<Self, GroupError> {
        if count == 0 {
            return Err(GroupError::ZeroCount(class));
        }
        Ok(Group { class, count })
    }

    pub fn class(&self) -> UnitClass {
        self.class
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Strength against `opponent` under the standard table.
    pub fn effective_strength(&self, opponent: &Group) -> u64 {
        self.effective_strength_with(opponent, &STANDARD_RULES)
    }

    /// Strength against `opponent`: the count, doubled if this group's class
    /// is advantaged over the opponent's class in `rules`.
    #[inline]
    pub fn effective_strength_with(&self, opponent: &Group, rules: &AdvantageRules) -> u64 {
        let base = u64::from(self.count);
        if rules.beats(self.class, opponent.class) {
            base * 2
        } else {
            base
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use UnitClass::*;

    fn g(class: UnitClass, count: u32) -> Group {
        Group::new(class, count).unwrap()
    }

    #[test]
    fn zero_count_rejected() {
        assert_eq!(Group::new(Militia, 0), Err(GroupError::ZeroCount(Militia)));
    }

    #[test]
    fn strength_without_advantage_is_count() {
        // Spearmen hold no advantage over Militia.
        assert_eq!(g(Spearmen, 5).effective_strength(&g(Militia, 3)), 5);
    }

    #[test]
    fn strength_with_advantage_is_doubled() {
        assert_eq!(g(Militia, 5).effective_strength(&g(Spearmen, 3)), 10);
    }

    #[test]
    fn strength_ignores_opponent_count() {
        let own = g(FootArcher, 7);
        assert_eq!(own.effective_strength(&g(CavalryArcher, 1)), 14);
        assert_eq!(own.effective_strength(&g(CavalryArcher, 1000)), 14);
    }

    #[test]
    fn strength_does_not_overflow_at_max_count() {
        let own = g(HeavyCavalry, u32::MAX);
        assert_eq!(own.effective_strength(&g(Militia, 1)), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn class_without_row_is_never_doubled() {
        let rules = STANDARD_RULES.without_row(Militia);
        assert_eq!(g(Militia, 5).effective_strength_with(&g(Spearmen, 1), &rules), 5);
    }

    #[test]
    fn display_uses_army_notation() {
        assert_eq!(g(LightCavalry, 12).to_string(), "LightCavalry#12");
    }
}

//! Unit classes and the class-advantage table.
//!
//! The six classes form a rock-paper-scissors style relation: each class is
//! advantaged over a small set of others. Advantage is directed and the
//! table is neither symmetric nor total. A class with no row in a table is
//! advantaged over nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of unit classes.
pub const CLASS_COUNT: usize = 6;

/// A unit class.
///
/// The `#[repr(u8)]` attribute enables use as an index into
/// `AdvantageRules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitClass {
    Militia = 0,
    Spearmen = 1,
    LightCavalry = 2,
    HeavyCavalry = 3,
    CavalryArcher = 4,
    FootArcher = 5,
}

/// All unit classes in discriminant order.
pub const ALL_CLASSES: [UnitClass; CLASS_COUNT] = [
    UnitClass::Militia,
    UnitClass::Spearmen,
    UnitClass::LightCavalry,
    UnitClass::HeavyCavalry,
    UnitClass::CavalryArcher,
    UnitClass::FootArcher,
];

impl UnitClass {
    /// Returns the canonical name used in army notation.
    pub const fn name(self) -> &'static str {
        match self {
            UnitClass::Militia => "Militia",
            UnitClass::Spearmen => "Spearmen",
            UnitClass::LightCavalry => "LightCavalry",
            UnitClass::HeavyCavalry => "HeavyCavalry",
            UnitClass::CavalryArcher => "CavalryArcher",
            UnitClass::FootArcher => "FootArcher",
        }
    }

    /// Parses a class from its canonical name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<UnitClass> {
        match name {
            "Militia" => Some(UnitClass::Militia),
            "Spearmen" => Some(UnitClass::Spearmen),
            "LightCavalry" => Some(UnitClass::LightCavalry),
            "HeavyCavalry" => Some(UnitClass::HeavyCavalry),
            "CavalryArcher" => Some(UnitClass::CavalryArcher),
            "FootArcher" => Some(UnitClass::FootArcher),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directed class-advantage relation.
///
/// Stored as one bitmask row per attacking class. Tables are built at
/// compile time and only ever queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvantageRules {
    rows: [u8; CLASS_COUNT],
}

/// The standard advantage table.
pub static STANDARD_RULES: AdvantageRules = AdvantageRules::standard();

impl AdvantageRules {
    /// A table in which no class is advantaged over any other.
    pub const fn empty() -> Self {
        AdvantageRules {
            rows: [0; CLASS_COUNT],
        }
    }

    /// The standard table:
    ///
    /// | attacker      | beats                                  |
    /// |---------------|----------------------------------------|
    /// | Militia       | Spearmen, LightCavalry                 |
    /// | Spearmen      | LightCavalry, HeavyCavalry             |
    /// | LightCavalry  | FootArcher, CavalryArcher              |
    /// | HeavyCavalry  | Militia, FootArcher, LightCavalry      |
    /// | CavalryArcher | Spearmen, HeavyCavalry                 |
    /// | FootArcher    | Militia, CavalryArcher                 |
    pub const fn standard() -> Self {
        use UnitClass::*;
        AdvantageRules::empty()
            .with(Militia, Spearmen)
            .with(Militia, LightCavalry)
            .with(Spearmen, LightCavalry)
            .with(Spearmen, HeavyCavalry)
            .with(LightCavalry, FootArcher)
            .with(LightCavalry, CavalryArcher)
            .with(HeavyCavalry, Militia)
            .with(HeavyCavalry, FootArcher)
            .with(HeavyCavalry, LightCavalry)
            .with(CavalryArcher, Spearmen)
            .with(CavalryArcher, HeavyCavalry)
            .with(FootArcher, Militia)
            .with(FootArcher, CavalryArcher)
    }

    /// Returns a copy of this table with `attacker` advantaged over `defender`.
    pub const fn with(mut self, attacker: UnitClass, defender: UnitClass) -> Self {
        self.rows[attacker as usize] |= defender.bit();
        self
    }

    /// Returns a copy of this table with the row for `attacker` removed.
    pub const fn without_row(mut self, attacker: UnitClass) -> Self {
        self.rows[attacker as usize] = 0;
        self
    }

    /// Returns true iff `attacker` is listed as advantaged over `defender`.
    #[inline]
    pub fn beats(&self, attacker: UnitClass, defender: UnitClass) -> bool {
        self.rows
            .get(attacker as usize)
            .is_some_and(|row| row & defender.bit() != 0)
    }

    /// Returns the classes `attacker` is advantaged over, in discriminant order.
    pub fn defeated_by(&self, attacker: UnitClass) -> impl Iterator<Item = UnitClass> + '_ {
        ALL_CLASSES
            .into_iter()
            .filter(move |&defender| self.beats(attacker, defender))
    }
}

impl Default for AdvantageRules {
    fn default() -> Self {
        AdvantageRules::standard()
    }
}

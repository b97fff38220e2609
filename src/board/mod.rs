//! Army representation.
//!
//! Contains unit classes and their advantage table, troop groups, and
//! forces (ordered sequences of groups).

pub mod class;
pub mod force;
pub mod group;

pub use class::{AdvantageRules, UnitClass, ALL_CLASSES, CLASS_COUNT, STANDARD_RULES};
pub use force::Force;
pub use group::{Group, GroupError};

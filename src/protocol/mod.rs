//! Text formats at the edge of the planner.
//!
//! Parsing of army notation into forces, and rendering of search outcomes
//! as a battle report or JSON.

pub mod army;
pub mod report;

pub use army::{format_force, format_group, format_groups, parse_force, parse_group, ArmyError};
pub use report::{write_json, write_report, NO_SOLUTION_TEXT};

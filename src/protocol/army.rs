//! Army notation encoding and decoding.
//!
//! An army is written as `Class#Count` entries separated by `;`, for
//! example `Militia#5;FootArcher#3`. Whitespace around the whole input and
//! around each class name and count is ignored. Class names are
//! case-sensitive.

use thiserror::Error;

use crate::board::{Force, Group, GroupError, UnitClass};

/// Errors that can occur when parsing army notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArmyError {
    #[error("empty input")]
    EmptyInput,

    #[error("entry {index} is empty")]
    EmptyEntry { index: usize },

    #[error("malformed entry '{entry}', expected Class#Count")]
    MalformedEntry { entry: String },

    #[error("unknown unit class '{0}'")]
    UnknownClass(String),

    #[error("invalid count '{value}' in entry '{entry}'")]
    InvalidCount { entry: String, value: String },

    #[error("invalid group at entry {index}: {source}")]
    InvalidGroup {
        index: usize,
        #[source]
        source: GroupError,
    },
}

/// Parses a single `Class#Count` entry. `index` is used for error reporting.
pub fn parse_group(entry: &str, index: usize) -> Result<Group, ArmyError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(ArmyError::EmptyEntry { index });
    }

    let mut parts = entry.split('#');
    let (class, count) = match (parts.next(), parts.next(), parts.next()) {
        (Some(class), Some(count), None) => (class.trim(), count.trim()),
        _ => {
            return Err(ArmyError::MalformedEntry {
                entry: entry.to_string(),
            })
        }
    };

    let class =
        UnitClass::from_name(class).ok_or_else(|| ArmyError::UnknownClass(class.to_string()))?;
    let count: u32 = count.parse().map_err(|_| ArmyError::InvalidCount {
        entry: entry.to_string(),
        value: count.to_string(),
    })?;

    Group::new(class, count).map_err(|source| ArmyError::InvalidGroup { index, source })
}

/// Parses a full army string into a `Force`.
pub fn parse_force(s: &str) -> Result<Force, ArmyError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ArmyError::EmptyInput);
    }

    s.split(';')
        .enumerate()
        .map(|(i, entry)| parse_group(entry, i))
        .collect::<Result<Vec<_>, _>>()
        .map(Force::new)
}

/// Formats a group as `Class#Count`.
pub fn format_group(group: &Group) -> String {
    group.to_string()
}

/// Formats groups as `;`-separated army notation.
pub fn format_groups(groups: &[Group]) -> String {
    groups
        .iter()
        .map(format_group)
        .collect::<Vec<_>>()
        .join(";")
}

/// Formats a force as army notation.
pub fn format_force(force: &Force) -> String {
    format_groups(force.groups())
}

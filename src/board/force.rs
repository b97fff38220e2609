//! Forces: ordered sequences of groups.

use std::ops::Index;

use serde::Serialize;

use super::group::Group;

/// An ordered collection of groups.
///
/// The opponent's force is paired in its given order; the own force's
/// order is what the arrangement search permutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Force {
    groups: Vec<Group>,
}

impl Force {
    pub fn new(groups: Vec<Group>) -> Self {
        Force { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Total head count across all groups.
    pub fn total_count(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.count())).sum()
    }

    /// Returns the groups reordered by `order`, a permutation of indices.
    pub fn arranged(&self, order: &[usize]) -> Vec<Group> {
        order.iter().map(|&i| self.groups[i]).collect()
    }
}

impl From<Vec<Group>> for Force {
    fn from(groups: Vec<Group>) -> Self {
        Force::new(groups)
    }
}

impl FromIterator<Group> for Force {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Force::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Force {
    type Output = Group;

    fn index(&self, index: usize) -> &Group {
        &self.groups[index]
    }
}

impl<'a> IntoIterator for &'a Force {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

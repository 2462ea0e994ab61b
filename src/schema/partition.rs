//! Partition types: ordered groups of opaque elements.
//!
//! A partition is a complete, disjoint cover of a set of input elements.
//! Group order and element order inside a group carry no meaning for
//! scoring, but both are preserved so enumeration and search stay
//! reproducible.

use serde::{Deserialize, Deserializer, Serialize};

/// A partition of elements into non-empty groups.
///
/// Serializes as a list of lists. Deserializing drops empty groups, the same
/// as [`Partition::from_groups`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Partition<T> {
    groups: Vec<Vec<T>>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Partition<T> {
    /// Create an empty partition (the partition of zero elements).
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Build a partition from raw groups, dropping empty ones.
    pub fn from_groups(groups: Vec<Vec<T>>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    /// The groups, in order.
    #[inline]
    pub fn groups(&self) -> &[Vec<T>] {
        &self.groups
    }

    /// Consume the partition and return its groups.
    pub fn into_groups(self) -> Vec<Vec<T>> {
        self.groups
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True for the partition of zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of elements across all groups.
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Iterate over the groups as slices.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Append an element to an existing group in place.
    ///
    /// Panics if `group` is out of range.
    pub(crate) fn push_into(&mut self, group: usize, element: T) {
        self.groups[group].push(element);
    }

    /// Append a new singleton group in place.
    pub(crate) fn push_group(&mut self, element: T) {
        self.groups.push(vec![element]);
    }

    /// Undo [`push_into`](Self::push_into) on `group`.
    pub(crate) fn pop_from(&mut self, group: usize) -> Option<T> {
        self.groups[group].pop()
    }

    /// Undo [`push_group`](Self::push_group).
    pub(crate) fn pop_group(&mut self) -> Option<Vec<T>> {
        self.groups.pop()
    }
}

impl<T: Clone> Partition<T> {
    /// All elements in one group. Empty input gives the empty partition.
    pub fn single_group(elements: &[T]) -> Self {
        Self::from_groups(vec![elements.to_vec()])
    }

    /// Every element in its own group.
    pub fn singletons(elements: &[T]) -> Self {
        Self {
            groups: elements.iter().map(|e| vec![e.clone()]).collect(),
        }
    }

    /// Copy of this partition with `element` appended to group `group`.
    pub fn with_appended(&self, group: usize, element: &T) -> Self {
        let mut next = self.clone();
        next.push_into(group, element.clone());
        next
    }

    /// Copy of this partition with a new singleton group holding `element`.
    pub fn with_new_group(&self, element: &T) -> Self {
        let mut next = self.clone();
        next.push_group(element.clone());
        next
    }

    /// Copy of this partition with group `second` concatenated onto group
    /// `first` and removed from the group list. Other groups keep their
    /// relative order.
    ///
    /// Panics unless `first < second < self.len()`.
    pub fn merged(&self, first: usize, second: usize) -> Self {
        assert!(first < second && second < self.groups.len());
        let mut groups = Vec::with_capacity(self.groups.len() - 1);
        for (index, group) in self.groups.iter().enumerate() {
            if index == second {
                continue;
            }
            let mut group = group.clone();
            if index == first {
                group.extend(self.groups[second].iter().cloned());
            }
            groups.push(group);
        }
        Self { groups }
    }
}

impl<T: PartialEq> Partition<T> {
    /// Check that the groups are non-empty and that together they hold
    /// exactly the multiset `elements`: nothing dropped, duplicated or
    /// invented.
    pub fn covers(&self, elements: &[T]) -> bool {
        if self.groups.iter().any(Vec::is_empty) || self.element_count() != elements.len() {
            return false;
        }
        let mut used = vec![false; elements.len()];
        self.groups.iter().flatten().all(|member| {
            match (0..elements.len()).find(|&i| !used[i] && elements[i] == *member) {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<T> From<Vec<Vec<T>>> for Partition<T> {
    fn from(groups: Vec<Vec<T>>) -> Self {
        Self::from_groups(groups)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Partition<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Vec<T>>::deserialize(deserializer).map(Self::from_groups)
    }
}

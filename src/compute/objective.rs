//! Objective functions: how candidate groups and partitions are ranked.

use std::cell::Cell;

use crate::schema::Partition;

/// Scores a group of elements. Higher is better.
///
/// Implementations must be total over non-empty groups and free of side
/// effects: search strategies call them many times on overlapping groups.
/// A panicking objective aborts the search; strategies do not catch it.
pub trait Objective<T> {
    /// Score of a single group.
    fn score_group(&self, group: &[T]) -> f64;

    /// Score of a whole partition. Defaults to the mean group score, and to
    /// 0.0 for the empty partition.
    fn score_partition(&self, partition: &Partition<T>) -> f64 {
        if partition.is_empty() {
            return 0.0;
        }
        let total: f64 = partition.iter().map(|group| self.score_group(group)).sum();
        total / partition.len() as f64
    }
}

impl<T, F> Objective<T> for F
where
    F: Fn(&[T]) -> f64,
{
    fn score_group(&self, group: &[T]) -> f64 {
        self(group)
    }
}

/// Wraps an objective and counts how often it is consulted.
pub(crate) struct Counted<'a, O: ?Sized> {
    inner: &'a O,
    calls: Cell<u64>,
}

impl<'a, O: ?Sized> Counted<'a, O> {
    pub(crate) fn new(inner: &'a O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Group and partition evaluations so far.
    pub(crate) fn calls(&self) -> u64 {
        self.calls.get()
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<T, O> Objective<T> for Counted<'_, O>
where
    O: Objective<T> + ?Sized,
{
    fn score_group(&self, group: &[T]) -> f64 {
        self.bump();
        self.inner.score_group(group)
    }

    fn score_partition(&self, partition: &Partition<T>) -> f64 {
        self.bump();
        self.inner.score_partition(partition)
    }
}

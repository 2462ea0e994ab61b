//! Incremental partition enumeration.
//!
//! Partitions of `n` elements are built one element at a time: every
//! partition of the first `i` elements spawns one child per existing group
//! (the element joins that group) plus, while under the group cap, one child
//! where the element opens a new group. The output grows like the Bell
//! numbers, so callers must keep `n` small.
//!
//! [`enumerate_partitions`] materializes the whole set. The searches use
//! [`for_each_partition`] instead, which walks the same tree depth-first
//! over a single partition and holds `O(n)` memory.

use crate::schema::Partition;

/// Extend every partition in `partitions` with `element`.
///
/// Starting from an empty set this yields the single partition
/// `[[element]]`. For each existing partition the children appear in order:
/// element appended to group 0, 1, ..., then the new-group child if the
/// partition has fewer than `max_groups` groups.
pub fn extend_partitions<T: Clone>(
    element: &T,
    partitions: &[Partition<T>],
    max_groups: usize,
) -> Vec<Partition<T>> {
    if partitions.is_empty() {
        return vec![Partition::singletons(std::slice::from_ref(element))];
    }

    let mut extended = Vec::with_capacity(partitions.len() * 2);
    for partition in partitions {
        for group in 0..partition.len() {
            extended.push(partition.with_appended(group, element));
        }
        if partition.len() < max_groups {
            extended.push(partition.with_new_group(element));
        }
    }
    extended
}

/// Every partition of `elements` with at most `max_groups` groups.
///
/// Empty input yields an empty set. A cap of zero behaves like one.
pub fn enumerate_partitions<T: Clone>(elements: &[T], max_groups: usize) -> Vec<Partition<T>> {
    elements.iter().fold(Vec::new(), |partitions, element| {
        extend_partitions(element, &partitions, max_groups)
    })
}

/// Visit every partition of `elements` with at most `max_groups` groups, in
/// the order [`enumerate_partitions`] returns them.
///
/// The visitor sees a borrowed partition that is modified in place between
/// calls; clone it to keep it.
pub fn for_each_partition<T, F>(elements: &[T], max_groups: usize, mut visit: F)
where
    T: Clone,
    F: FnMut(&Partition<T>),
{
    let Some((first, rest)) = elements.split_first() else {
        return;
    };
    let mut partition = Partition::singletons(std::slice::from_ref(first));
    descend(&mut partition, rest, max_groups, &mut visit);
}

fn descend<T, F>(partition: &mut Partition<T>, rest: &[T], max_groups: usize, visit: &mut F)
where
    T: Clone,
    F: FnMut(&Partition<T>),
{
    let Some((element, rest)) = rest.split_first() else {
        visit(partition);
        return;
    };
    for group in 0..partition.len() {
        partition.push_into(group, element.clone());
        descend(partition, rest, max_groups, visit);
        partition.pop_from(group);
    }
    if partition.len() < max_groups {
        partition.push_group(element.clone());
        descend(partition, rest, max_groups, visit);
        partition.pop_group();
    }
}

/// Number of partitions [`enumerate_partitions`] yields for `n` elements
/// and the given group cap, saturating at `u128::MAX`.
///
/// This is the sum of Stirling numbers of the second kind `S(n, k)` for
/// `k <= max_groups`; with `max_groups >= n` it is the Bell number `B(n)`.
pub fn partition_count(n: usize, max_groups: usize) -> u128 {
    if n == 0 {
        return 0;
    }
    let cap = max_groups.clamp(1, n);

    // row[k] = S(i, k) for the current i
    let mut row = vec![0u128; cap + 1];
    row[1] = 1;
    for i in 2..=n {
        for k in (1..=cap.min(i)).rev() {
            let stay = row[k].saturating_mul(k as u128);
            row[k] = stay.saturating_add(row[k - 1]);
        }
    }
    row.iter()
        .skip(1)
        .fold(0u128, |total, &count| total.saturating_add(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELL: [u128; 9] = [0, 1, 2, 5, 15, 52, 203, 877, 4140];

    #[test]
    fn test_empty_input() {
        let partitions = enumerate_partitions::<u8>(&[], 4);
        assert!(partitions.is_empty());
    }

    #[test]
    fn test_seed_partition() {
        let partitions = extend_partitions(&'a', &[], 3);
        assert_eq!(partitions, vec![Partition::from_groups(vec![vec!['a']])]);
    }

    #[test]
    fn test_enumeration_order() {
        let partitions = enumerate_partitions(&['a', 'b', 'c'], 3);
        let groups: Vec<Vec<Vec<char>>> = partitions.into_iter().map(|p| p.into_groups()).collect();
        assert_eq!(
            groups,
            vec![
                vec![vec!['a', 'b', 'c']],
                vec![vec!['a', 'b'], vec!['c']],
                vec![vec!['a', 'c'], vec!['b']],
                vec![vec!['a'], vec!['b', 'c']],
                vec![vec!['a'], vec!['b'], vec!['c']],
            ]
        );
    }

    #[test]
    fn test_bell_numbers() {
        for n in 1..BELL.len() {
            let elements: Vec<usize> = (0..n).collect();
            let partitions = enumerate_partitions(&elements, n);
            assert_eq!(partitions.len() as u128, BELL[n], "n = {n}");
            assert_eq!(partition_count(n, n), BELL[n]);
            assert!(partitions.iter().all(|p| p.covers(&elements)));
        }
    }

    #[test]
    fn test_group_cap() {
        let elements: Vec<usize> = (0..6).collect();
        for cap in 1..=6 {
            let partitions = enumerate_partitions(&elements, cap);
            assert!(partitions.iter().all(|p| p.len() <= cap));
            assert_eq!(partitions.len() as u128, partition_count(6, cap));
        }
        // S(6, 1) + S(6, 2) = 1 + 31
        assert_eq!(partition_count(6, 2), 32);
    }

    #[test]
    fn test_zero_cap_behaves_like_one() {
        let partitions = enumerate_partitions(&[1, 2, 3], 0);
        assert_eq!(partitions, vec![Partition::from_groups(vec![vec![1, 2, 3]])]);
        assert_eq!(partition_count(3, 0), 1);
    }

    #[test]
    fn test_partitions_are_distinct() {
        let elements: Vec<usize> = (0..5).collect();
        let partitions = enumerate_partitions(&elements, 5);
        for (i, a) in partitions.iter().enumerate() {
            for b in &partitions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_visits_in_enumeration_order() {
        let elements: Vec<usize> = (0..6).collect();
        for cap in 0..=6 {
            let mut visited = Vec::new();
            for_each_partition(&elements, cap, |p| visited.push(p.clone()));
            assert_eq!(visited, enumerate_partitions(&elements, cap), "cap = {cap}");
        }
    }

    #[test]
    fn test_visit_nothing_for_empty_input() {
        let mut calls = 0;
        for_each_partition::<u8, _>(&[], 3, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_visit_counts_match_bell_numbers() {
        // Bell(12), never held in memory at once
        let elements: Vec<u32> = (0..12).collect();
        let mut calls = 0u128;
        let mut widest = 0;
        for_each_partition(&elements, elements.len(), |p| {
            calls += 1;
            widest = widest.max(p.len());
        });
        assert_eq!(calls, partition_count(12, 12));
        assert_eq!(calls, 4_213_597);
        assert_eq!(widest, 12);
    }

    #[test]
    fn test_partition_count_saturates() {
        assert_eq!(partition_count(400, 400), u128::MAX);
    }
}

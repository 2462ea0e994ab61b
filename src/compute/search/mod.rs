//! Search strategies over the space of partitions.
//!
//! Every strategy takes the input elements and an [`Objective`] and returns
//! a [`Partition`] covering each element exactly once:
//!
//! - [`BruteForceSearch`]: enumerates all partitions; optimal, usable for a
//!   dozen elements at most.
//! - [`HillClimbSearch`]: sweeps the group count upward and stops at the
//!   first decline in the best score.
//! - [`GeneticSearch`]: mutation, selection and pairwise recombination over
//!   a population of groups, driven by a [`RandomSource`].
//!
//! Strategies share one signature through [`SearchStrategy`], so callers can
//! swap them without other changes.

mod brute_force;
mod genetic;
mod hill_climb;
mod rng;

#[cfg(test)]
pub(crate) use rng::ScriptedRandom;

pub use brute_force::BruteForceSearch;
pub use genetic::GeneticSearch;
pub use hill_climb::HillClimbSearch;
pub use rng::{ClusterRng, RandomSource};

use crate::schema::{AlgorithmKind, Partition, SearchHistory};

use super::objective::Objective;

/// What the last search did.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Objective evaluations (partition and group scores).
    pub evaluations: u64,
    /// Strategy-specific trace.
    pub history: SearchHistory,
}

/// A partition search strategy.
pub trait SearchStrategy {
    /// Which strategy this is.
    fn kind(&self) -> AlgorithmKind;

    /// Partition `elements` to maximize `objective`.
    ///
    /// Empty input yields the empty partition.
    fn search<T, O>(&mut self, elements: &[T], objective: &O) -> Partition<T>
    where
        T: Clone,
        O: Objective<T> + ?Sized;

    /// Report of the most recent [`search`](Self::search).
    fn report(&self) -> &SearchReport;
}

/// Running best over a stream of borrowed candidates. Ties go to the later
/// candidate; only a replacement clones.
struct Leader<T> {
    best: Option<(Partition<T>, f64)>,
    seen: usize,
}

impl<T: Clone> Leader<T> {
    fn new() -> Self {
        Self {
            best: None,
            seen: 0,
        }
    }

    fn offer<O>(&mut self, candidate: &Partition<T>, objective: &O)
    where
        O: Objective<T> + ?Sized,
    {
        let score = objective.score_partition(candidate);
        self.seen += 1;
        match &mut self.best {
            Some((best, best_score)) => {
                if score >= *best_score {
                    best.clone_from(candidate);
                    *best_score = score;
                }
            }
            None => self.best = Some((candidate.clone(), score)),
        }
    }

    /// Candidates offered so far.
    fn seen(&self) -> usize {
        self.seen
    }

    fn into_best(self) -> Option<(Partition<T>, f64)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_prefers_later_on_tie() {
        let candidates = vec![
            Partition::from_groups(vec![vec![1, 2]]),
            Partition::from_groups(vec![vec![1], vec![2]]),
            Partition::from_groups(vec![vec![2, 1]]),
        ];
        let objective = |_: &[i32]| 1.0;
        let mut leader = Leader::new();
        for candidate in &candidates {
            leader.offer(candidate, &objective);
        }
        assert_eq!(leader.seen(), 3);
        let (best, score) = leader.into_best().unwrap();
        assert_eq!(best.groups(), &[vec![2, 1]]);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_leader_keeps_strictly_better() {
        let objective = |group: &[i32]| -(group.len() as f64);
        let mut leader = Leader::new();
        leader.offer(&Partition::from_groups(vec![vec![1], vec![2]]), &objective);
        leader.offer(&Partition::from_groups(vec![vec![1, 2]]), &objective);
        let (best, score) = leader.into_best().unwrap();
        assert_eq!(best.groups(), &[vec![1], vec![2]]);
        assert_eq!(score, -1.0);
    }

    #[test]
    fn test_leader_empty() {
        let leader: Leader<i32> = Leader::new();
        assert_eq!(leader.seen(), 0);
        assert!(leader.into_best().is_none());
    }
}

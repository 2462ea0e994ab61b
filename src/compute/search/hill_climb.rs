//! Greedy sweep over the group count.

use log::debug;

use crate::compute::enumerate::for_each_partition;
use crate::compute::objective::{Counted, Objective};
use crate::schema::{AlgorithmKind, Partition, SearchHistory, SweepStep, SweepStop};

use super::{Leader, SearchReport, SearchStrategy};

/// Finds the best partition with exactly `k` groups for `k = 1, 2, ...`
/// and stops as soon as the best score drops below the previous `k`'s.
///
/// Assumes the score is unimodal in the group count, so the result is not
/// guaranteed optimal. The sweep stops at `k = n - 1`; a single element is
/// returned as one group without sweeping.
#[derive(Debug, Default)]
pub struct HillClimbSearch {
    report: SearchReport,
}

impl HillClimbSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for HillClimbSearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::HillClimb
    }

    fn search<T, O>(&mut self, elements: &[T], objective: &O) -> Partition<T>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let counted = Counted::new(objective);
        let mut history = SearchHistory::default();

        let partition = if elements.len() <= 1 {
            Partition::single_group(elements)
        } else {
            let mut previous: Option<(Partition<T>, f64)> = None;
            let mut stop = SweepStop::Exhausted;

            for groups in 1..elements.len() {
                let mut leader = Leader::new();
                for_each_partition(elements, groups, |candidate| {
                    if candidate.len() == groups {
                        leader.offer(candidate, &counted);
                    }
                });
                let count = leader.seen();
                let Some((best, score)) = leader.into_best() else {
                    break;
                };

                debug!("hill-climb: k={groups} best score {score:.4} over {count} partitions");
                history.sweep.push(SweepStep {
                    groups,
                    candidates: count,
                    best_score: score,
                });

                if let Some((_, previous_score)) = &previous
                    && score < *previous_score
                {
                    stop = SweepStop::ScoreDeclined { groups };
                    break;
                }
                previous = Some((best, score));
            }

            history.sweep_stop = Some(stop);
            previous
                .map(|(partition, _)| partition)
                .unwrap_or_else(|| Partition::single_group(elements))
        };

        self.report = SearchReport {
            evaluations: counted.calls(),
            history,
        };
        partition
    }

    fn report(&self) -> &SearchReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::similarity::RlcsObjective;
    use proptest::prelude::*;

    /// Groups of two score best; anything else scores by distance from two.
    fn pairs_objective(group: &[usize]) -> f64 {
        -((group.len() as f64) - 2.0).abs()
    }

    #[test]
    fn test_empty_and_single() {
        let mut search = HillClimbSearch::new();
        assert!(search.search(&[] as &[usize], &pairs_objective).is_empty());

        let partition = search.search(&[3usize], &pairs_objective);
        assert_eq!(partition.groups(), &[vec![3]]);
        assert!(search.report().history.sweep.is_empty());
        assert_eq!(search.report().history.sweep_stop, None);
    }

    #[test]
    fn test_two_elements_only_inspect_one_group() {
        let mut search = HillClimbSearch::new();
        let partition = search.search(&[1usize, 2], &|_: &[usize]| 0.0);
        assert_eq!(partition.groups(), &[vec![1, 2]]);
        assert_eq!(search.report().history.sweep.len(), 1);
        assert_eq!(search.report().history.sweep_stop, Some(SweepStop::Exhausted));
    }

    #[test]
    fn test_stops_at_first_decline() {
        let elements: Vec<usize> = (0..6).collect();
        let mut search = HillClimbSearch::new();
        let partition = search.search(&elements, &pairs_objective);

        assert!(partition.covers(&elements));
        assert_eq!(partition.len(), 3);
        assert!(partition.iter().all(|group| group.len() == 2));

        let history = &search.report().history;
        // k=1: -4, k=2: best split 3+3 gives -1, k=3: 0, k=4: declines
        let scores: Vec<f64> = history.sweep.iter().map(|s| s.best_score).collect();
        assert_eq!(scores, vec![-4.0, -1.0, 0.0, -0.5]);
        assert_eq!(
            history.sweep_stop,
            Some(SweepStop::ScoreDeclined { groups: 4 })
        );
        // S(6, 1), S(6, 2), S(6, 3), S(6, 4)
        let counts: Vec<usize> = history.sweep.iter().map(|s| s.candidates).collect();
        assert_eq!(counts, vec![1, 31, 90, 65]);
    }

    #[test]
    fn test_exhausts_when_score_keeps_rising() {
        let elements: Vec<usize> = (0..5).collect();
        let mut search = HillClimbSearch::new();
        // Smaller groups always better; the sweep never reaches k = n
        let partition = search.search(&elements, &|group: &[usize]| -(group.len() as f64));

        assert_eq!(partition.len(), 4);
        assert_eq!(search.report().history.sweep.len(), 4);
        assert_eq!(
            search.report().history.sweep_stop,
            Some(SweepStop::Exhausted)
        );
    }

    #[test]
    fn test_rlcs_clusters_similar_strings() {
        let elements = ["testing123", "testing124", "zzqqyy", "zzqqyx"];
        let mut search = HillClimbSearch::new();
        let partition = search.search(&elements, &RlcsObjective::new(0.5));
        assert_eq!(
            partition.groups(),
            &[vec!["testing123", "testing124"], vec!["zzqqyy", "zzqqyx"]]
        );
        assert_eq!(
            search.report().history.sweep_stop,
            Some(SweepStop::ScoreDeclined { groups: 3 })
        );
    }

    fn hashed_objective(group: &[u8]) -> f64 {
        let mix = group
            .iter()
            .fold(0u64, |acc, &x| acc.wrapping_add((x as u64).wrapping_mul(2654435761)));
        (mix % 101) as f64 / 101.0
    }

    proptest! {
        #[test]
        fn prop_complete_and_not_worse_than_one_group(
            elements in prop::collection::vec(any::<u8>(), 0..7)
        ) {
            let mut search = HillClimbSearch::new();
            let partition = search.search(&elements, &hashed_objective);
            prop_assert!(partition.covers(&elements));

            let score = hashed_objective.score_partition(&partition);
            let together = Partition::single_group(&elements);
            prop_assert!(score >= hashed_objective.score_partition(&together));

            let steps = &search.report().history.sweep;
            for pair in steps.windows(2) {
                if pair[1].best_score >= pair[0].best_score {
                    continue;
                }
                // Only the last step may decline
                prop_assert_eq!(pair[1].groups, steps.last().unwrap().groups);
            }
        }
    }
}

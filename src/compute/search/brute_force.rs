//! Exhaustive search over every partition.

use log::debug;

use crate::compute::enumerate::for_each_partition;
use crate::compute::objective::{Counted, Objective};
use crate::schema::{AlgorithmKind, Partition, SearchHistory};

use super::{Leader, SearchReport, SearchStrategy};

/// Scores every partition of the input and returns the best one.
///
/// Globally optimal for the given objective. Cost grows with the Bell
/// numbers (B(12) is about four million), so inputs beyond a dozen
/// elements are impractical; [`ClusteringEngine`](crate::ClusteringEngine)
/// enforces a configurable bound. Candidates are streamed, so memory stays
/// linear in the input. Ties go to the later-enumerated partition.
#[derive(Debug, Default)]
pub struct BruteForceSearch {
    report: SearchReport,
}

impl BruteForceSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for BruteForceSearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::BruteForce
    }

    fn search<T, O>(&mut self, elements: &[T], objective: &O) -> Partition<T>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let counted = Counted::new(objective);
        let mut leader = Leader::new();
        for_each_partition(elements, elements.len(), |candidate| {
            leader.offer(candidate, &counted);
        });
        debug!("brute-force: scored {} partitions", leader.seen());

        let partition = leader
            .into_best()
            .map(|(partition, _)| partition)
            .unwrap_or_default();

        self.report = SearchReport {
            evaluations: counted.calls(),
            history: SearchHistory::default(),
        };
        partition
    }

    fn report(&self) -> &SearchReport {
        &self.report
    }
}

//! Clustering engine: configuration-driven entry point to the strategies.

use std::time::Instant;

use log::{debug, info};

use crate::schema::{
    AlgorithmKind, ClusteringConfig, ClusteringResult, ConfigError, SearchAlgorithm, SearchStats,
};

use super::enumerate::partition_count;
use super::objective::Objective;
use super::search::{
    BruteForceSearch, ClusterRng, GeneticSearch, HillClimbSearch, SearchStrategy,
};
use super::similarity::RlcsObjective;

/// Errors raised before a search starts.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{algorithm} search accepts at most {limit} elements, got {count}")]
    TooManyElements {
        algorithm: AlgorithmKind,
        count: usize,
        limit: usize,
    },
}

/// Runs the configured search strategy and collects statistics.
#[derive(Debug, Clone)]
pub struct ClusteringEngine {
    config: ClusteringConfig,
}

impl ClusteringEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: ClusteringConfig) -> Result<Self, ClusterError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// The RLCS objective weighted by the configured tuning.
    pub fn rlcs_objective(&self) -> RlcsObjective {
        RlcsObjective::new(self.config.objective.tuning)
    }

    /// Partition `elements` to maximize `objective`.
    ///
    /// Brute-force and hill-climb runs are refused when the input exceeds
    /// the configured limits. A seeded configuration makes genetic runs
    /// reproducible; each call starts from the seed again.
    pub fn run<T, O>(
        &self,
        elements: &[T],
        objective: &O,
    ) -> Result<ClusteringResult<T>, ClusterError>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let limits = &self.config.limits;
        match &self.config.algorithm {
            SearchAlgorithm::BruteForce => {
                check_limit(
                    AlgorithmKind::BruteForce,
                    elements.len(),
                    limits.max_exhaustive_elements,
                )?;
                debug!(
                    "brute-force: {} elements, {} candidate partitions",
                    elements.len(),
                    partition_count(elements.len(), elements.len())
                );
                Ok(execute(BruteForceSearch::new(), elements, objective))
            }
            SearchAlgorithm::HillClimb => {
                check_limit(
                    AlgorithmKind::HillClimb,
                    elements.len(),
                    limits.max_sweep_elements,
                )?;
                Ok(execute(HillClimbSearch::new(), elements, objective))
            }
            SearchAlgorithm::Genetic(genetic) => {
                let rng = match self.config.random_seed {
                    Some(seed) => ClusterRng::new(seed),
                    None => ClusterRng::random(),
                };
                let search = GeneticSearch::new(genetic.clone(), rng);
                Ok(execute(search, elements, objective))
            }
        }
    }

    /// Cluster byte sequences with the configured RLCS objective.
    pub fn cluster_sequences<S>(&self, sequences: &[S]) -> Result<ClusteringResult<S>, ClusterError>
    where
        S: AsRef<[u8]> + Clone,
    {
        self.run(sequences, &self.rlcs_objective())
    }
}

fn check_limit(algorithm: AlgorithmKind, count: usize, limit: usize) -> Result<(), ClusterError> {
    if count > limit {
        return Err(ClusterError::TooManyElements {
            algorithm,
            count,
            limit,
        });
    }
    Ok(())
}

fn execute<S, T, O>(mut strategy: S, elements: &[T], objective: &O) -> ClusteringResult<T>
where
    S: SearchStrategy,
    T: Clone,
    O: Objective<T> + ?Sized,
{
    let start = Instant::now();
    let partition = strategy.search(elements, objective);
    let elapsed = start.elapsed().as_secs_f64();

    let score = objective.score_partition(&partition);
    let report = strategy.report();
    info!(
        "{} search: {} elements into {} groups, score {:.4} ({} evaluations, {:.3}s)",
        strategy.kind(),
        elements.len(),
        partition.len(),
        score,
        report.evaluations,
        elapsed
    );

    ClusteringResult {
        stats: SearchStats {
            algorithm: strategy.kind(),
            elements: elements.len(),
            groups: partition.len(),
            evaluations: report.evaluations,
            score,
            elapsed_seconds: elapsed,
        },
        history: report.history.clone(),
        partition,
    }
}

//! Result and statistics types produced by a clustering run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Partition;

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    BruteForce,
    HillClimb,
    Genetic,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::BruteForce => write!(f, "brute-force"),
            AlgorithmKind::HillClimb => write!(f, "hill-climb"),
            AlgorithmKind::Genetic => write!(f, "genetic"),
        }
    }
}

/// Final result of a clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringResult<T> {
    /// The chosen partition.
    pub partition: Partition<T>,
    /// Run statistics.
    pub stats: SearchStats,
    /// Strategy-specific trace.
    pub history: SearchHistory,
}

/// Summary statistics of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Strategy used.
    pub algorithm: AlgorithmKind,
    /// Number of input elements.
    pub elements: usize,
    /// Number of groups in the returned partition.
    pub groups: usize,
    /// Objective evaluations (partition and group scores).
    pub evaluations: u64,
    /// Partition score of the result.
    pub score: f64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

/// Strategy-specific search trace.
///
/// Brute-force search leaves every field empty; hill-climb fills the sweep,
/// genetic search fills the attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHistory {
    /// Best candidate found at each inspected group count.
    pub sweep: Vec<SweepStep>,
    /// Why the hill-climb sweep ended.
    pub sweep_stop: Option<SweepStop>,
    /// One trace per genetic attempt.
    pub attempts: Vec<AttemptTrace>,
}

/// One step of the hill-climb group-count sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepStep {
    /// Exact group count of the candidates.
    pub groups: usize,
    /// Candidates with exactly that many groups.
    pub candidates: usize,
    /// Best score among them.
    pub best_score: f64,
}

/// Reason the hill-climb sweep stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepStop {
    /// The best score at `groups` was worse than at `groups - 1`.
    ScoreDeclined { groups: usize },
    /// Every group count up to `n - 1` was inspected.
    Exhausted,
}

/// Trace of one genetic attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttemptTrace {
    /// Best population score after each epoch. Never decreases.
    pub epoch_best: Vec<f64>,
    /// Score of the best population before recombination.
    pub pre_recombination_score: f64,
    /// Number of merges committed during recombination.
    pub merges: usize,
    /// Score after recombination.
    pub final_score: f64,
}

//! Configuration types for clustering runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Search strategy to use.
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
    /// Weighting of the RLCS objective.
    #[serde(default)]
    pub objective: ObjectiveConfig,
    /// Input size bounds for the combinatorial strategies.
    #[serde(default)]
    pub limits: SearchLimits,
    /// Random seed for reproducibility (genetic search only).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::default(),
            objective: ObjectiveConfig::default(),
            limits: SearchLimits::default(),
            random_seed: None,
        }
    }
}

/// Search algorithm selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchAlgorithm {
    /// Enumerate every partition. Globally optimal, super-exponential.
    BruteForce,
    /// Sweep the group count upward until the best score declines.
    #[default]
    HillClimb,
    /// Population mutation, selection and recombination.
    Genetic(GeneticConfig),
}

/// Genetic search configuration.
///
/// Both fields default to values derived from the element count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// Number of independent attempts. `None` uses `floor(ln n) + 2`.
    #[serde(default)]
    pub attempts: Option<usize>,
    /// Epochs per attempt. `None` uses `n * n`.
    #[serde(default)]
    pub epochs: Option<usize>,
}

impl GeneticConfig {
    /// Attempts to run for `elements` inputs.
    pub fn attempts_for(&self, elements: usize) -> usize {
        self.attempts.unwrap_or_else(|| default_attempts(elements))
    }

    /// Epochs per attempt for `elements` inputs.
    pub fn epochs_for(&self, elements: usize) -> usize {
        self.epochs.unwrap_or(elements * elements)
    }
}

fn default_attempts(elements: usize) -> usize {
    if elements < 2 {
        return 2;
    }
    ((elements as f64).ln().floor() as usize + 2).max(2)
}

/// Weighting between sequence similarity and cluster count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    /// Weight of the similarity term (0.0-1.0). The remainder rewards
    /// fewer clusters.
    #[serde(default = "default_tuning")]
    pub tuning: f64,
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            tuning: default_tuning(),
        }
    }
}

fn default_tuning() -> f64 {
    0.5
}

/// Upper bounds on input size for strategies whose cost grows with the
/// Bell numbers. Bell(12) is roughly four million partitions.
///
/// Candidates are streamed and only the current best is kept, so memory is
/// linear in the input; the limits bound running time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Largest input accepted by brute-force search.
    #[serde(default = "default_max_exhaustive")]
    pub max_exhaustive_elements: usize,
    /// Largest input accepted by hill-climb search.
    #[serde(default = "default_max_sweep")]
    pub max_sweep_elements: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_exhaustive_elements: default_max_exhaustive(),
            max_sweep_elements: default_max_sweep(),
        }
    }
}

fn default_max_exhaustive() -> usize {
    12
}
fn default_max_sweep() -> usize {
    12
}

impl ClusteringConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tuning = self.objective.tuning;
        if !(0.0..=1.0).contains(&tuning) {
            return Err(ConfigError::InvalidTuning(tuning));
        }
        if self.limits.max_exhaustive_elements == 0 {
            return Err(ConfigError::InvalidLimit("max_exhaustive_elements"));
        }
        if self.limits.max_sweep_elements == 0 {
            return Err(ConfigError::InvalidLimit("max_sweep_elements"));
        }
        if let SearchAlgorithm::Genetic(genetic) = &self.algorithm {
            if genetic.attempts == Some(0) {
                return Err(ConfigError::InvalidGeneticParameter("attempts"));
            }
            if genetic.epochs == Some(0) {
                return Err(ConfigError::InvalidGeneticParameter("epochs"));
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Objective tuning weight {0} must lie in [0, 1]")]
    InvalidTuning(f64),
    #[error("Search limit {0} must be non-zero")]
    InvalidLimit(&'static str),
    #[error("Genetic {0} override must be positive")]
    InvalidGeneticParameter(&'static str),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Evolutionary search over a population of groups.
//!
//! Each attempt evolves one population (a partition) for a fixed number of
//! epochs:
//!
//! 1. **Mutation**: every dead element joins a uniformly drawn group, or
//!    opens a new one when the draw lands past the last group.
//! 2. **Scoring**: a population that beats the attempt's best replaces it.
//! 3. **Selection**: every group of the best population faces its own
//!    threshold `u1 * u2`, skewed toward zero. Groups above it survive into
//!    the next epoch; the rest dissolve and their elements die.
//!
//! The best population is then recombined: the single pairwise merge that
//! improves the score most is committed until no merge improves it. The
//! best attempt wins.

use log::{debug, trace};

use crate::compute::objective::{Counted, Objective};
use crate::schema::{AlgorithmKind, AttemptTrace, GeneticConfig, Partition, SearchHistory};

use super::rng::{ClusterRng, RandomSource};
use super::{SearchReport, SearchStrategy};

/// Genetic partition search.
///
/// Attempts default to `floor(ln n) + 2` and epochs to `n * n`; see
/// [`GeneticConfig`]. Results vary with the random source, so only the
/// invariants hold across runs: every element appears exactly once, and
/// the best score never decreases within an attempt.
pub struct GeneticSearch<R = ClusterRng> {
    config: GeneticConfig,
    rng: R,
    report: SearchReport,
}

impl GeneticSearch<ClusterRng> {
    /// Default configuration with a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneticConfig::default(), ClusterRng::new(seed))
    }

    /// Default configuration with an entropy-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(GeneticConfig::default(), ClusterRng::random())
    }
}

impl<R: RandomSource> GeneticSearch<R> {
    pub fn new(config: GeneticConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            report: SearchReport::default(),
        }
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Give back the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    fn attempt<T, O>(
        &mut self,
        elements: &[T],
        epochs: usize,
        objective: &O,
    ) -> (Partition<T>, AttemptTrace)
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let mut record = AttemptTrace::default();

        // Selecting against the empty partition leaves every element dead.
        let mut best = Partition::new();
        let mut best_score = f64::NEG_INFINITY;
        let mut survivors = Partition::new();
        let mut dead = elements.to_vec();

        for epoch in 0..epochs {
            let population = self.mutate(survivors, dead);
            let score = objective.score_partition(&population);
            if score > best_score || best.is_empty() {
                trace!("genetic: epoch {epoch} improved {best_score:.4} -> {score:.4}");
                best = population;
                best_score = score;
            }
            record.epoch_best.push(best_score);
            (survivors, dead) = self.select(&best, objective);
        }

        record.pre_recombination_score = best_score;
        let (population, score, merges) = recombine(best, best_score, objective);
        record.merges = merges;
        record.final_score = score;
        (population, record)
    }

    /// Assign every dead element to a random existing group or a new one.
    fn mutate<T>(&mut self, mut population: Partition<T>, dead: Vec<T>) -> Partition<T> {
        for element in dead {
            let target = self.rng.index_inclusive(population.len());
            if target < population.len() {
                population.push_into(target, element);
            } else {
                population.push_group(element);
            }
        }
        population
    }

    /// Split `best` into surviving groups and the elements of dissolved
    /// ones. Draws two units per group, in group order.
    fn select<T, O>(&mut self, best: &Partition<T>, objective: &O) -> (Partition<T>, Vec<T>)
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let mut survivors = Vec::with_capacity(best.len());
        let mut dead = Vec::new();
        for group in best.iter() {
            let threshold = self.rng.unit() * self.rng.unit();
            if objective.score_group(group) > threshold {
                survivors.push(group.to_vec());
            } else {
                dead.extend_from_slice(group);
            }
        }
        (Partition::from_groups(survivors), dead)
    }
}

/// Commit the best improving pairwise merge until none improves `score`.
/// Returns the fixed point, its score and the number of merges.
fn recombine<T, O>(
    mut population: Partition<T>,
    mut score: f64,
    objective: &O,
) -> (Partition<T>, f64, usize)
where
    T: Clone,
    O: Objective<T> + ?Sized,
{
    let mut merges = 0;
    loop {
        let mut improvement: Option<(Partition<T>, f64)> = None;
        for first in 0..population.len() {
            for second in first + 1..population.len() {
                let candidate = population.merged(first, second);
                let candidate_score = objective.score_partition(&candidate);
                let bar = improvement.as_ref().map_or(score, |(_, s)| *s);
                if candidate_score > bar {
                    improvement = Some((candidate, candidate_score));
                }
            }
        }

        match improvement {
            Some((merged, merged_score)) => {
                debug!("genetic: merge improved {score:.4} -> {merged_score:.4}");
                population = merged;
                score = merged_score;
                merges += 1;
            }
            None => return (population, score, merges),
        }
    }
}

impl<R: RandomSource> SearchStrategy for GeneticSearch<R> {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Genetic
    }

    fn search<T, O>(&mut self, elements: &[T], objective: &O) -> Partition<T>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let counted = Counted::new(objective);
        let mut history = SearchHistory::default();
        let mut overall: Option<(Partition<T>, f64)> = None;

        if !elements.is_empty() {
            let attempts = self.config.attempts_for(elements.len()).max(1);
            let epochs = self.config.epochs_for(elements.len()).max(1);

            for attempt in 0..attempts {
                let (population, record) = self.attempt(elements, epochs, &counted);
                let score = record.final_score;
                debug!(
                    "genetic: attempt {}/{attempts} scored {score:.4} with {} groups after {} merges",
                    attempt + 1,
                    population.len(),
                    record.merges
                );
                history.attempts.push(record);

                let replace = match &overall {
                    Some((_, best_score)) => score > *best_score,
                    None => true,
                };
                if replace {
                    overall = Some((population, score));
                }
            }
        }

        self.report = SearchReport {
            evaluations: counted.calls(),
            history,
        };
        overall.map(|(partition, _)| partition).unwrap_or_default()
    }

    fn report(&self) -> &SearchReport {
        &self.report
    }
}

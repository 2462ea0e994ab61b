//! Random sources for stochastic search.

use rand::prelude::*;

/// Source of the random draws consumed by genetic search.
///
/// Abstracted so tests can replay a recorded sequence of draws.
pub trait RandomSource {
    /// Uniform integer in `0..=upper`.
    fn index_inclusive(&mut self, upper: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        (**self).index_inclusive(upper)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Seedable random number generator for clustering.
pub struct ClusterRng {
    rng: StdRng,
}

impl ClusterRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for ClusterRng {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays fixed draws. Exhausted queues yield 0 and 0.0.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(upper)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

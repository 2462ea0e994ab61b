//! Compute module - Partition enumeration, search strategies and similarity.

mod engine;
mod enumerate;
mod objective;
mod similarity;

pub mod search;

pub use engine::*;
pub use enumerate::*;
pub use objective::Objective;
pub use search::{
    BruteForceSearch, ClusterRng, GeneticSearch, HillClimbSearch, RandomSource, SearchReport,
    SearchStrategy,
};
pub use similarity::*;

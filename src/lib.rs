//! seqcluster - Partition search and RLCS similarity for clustering.
//!
//! This crate groups opaque elements into clusters that maximize a
//! caller-supplied objective, and ships one concrete objective for byte
//! sequences based on recursively nested longest common substrings (RLCS).
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Partitions, configuration and result types
//! - `compute`: Enumeration, search strategies, similarity and the engine
//!
//! Search strategies are generic over the element type and only see it
//! through an [`Objective`]. The RLCS metric plugs in as one such objective.
//!
//! # Example
//!
//! ```rust
//! use seqcluster::{
//!     ClusteringEngine,
//!     schema::{ClusteringConfig, SearchAlgorithm},
//! };
//!
//! let config = ClusteringConfig {
//!     algorithm: SearchAlgorithm::BruteForce,
//!     ..Default::default()
//! };
//! let engine = ClusteringEngine::new(config).unwrap();
//!
//! let result = engine
//!     .cluster_sequences(&["testing123", "testing124", "zzqqyy", "zzqqyx"])
//!     .unwrap();
//! assert_eq!(result.partition.len(), 2);
//! ```
//!
//! Strategies can also be driven directly with any closure as objective:
//!
//! ```rust
//! use seqcluster::compute::{HillClimbSearch, SearchStrategy};
//!
//! let mut search = HillClimbSearch::new();
//! let partition = search.search(&[1, 2, 3, 4], &|group: &[i32]| {
//!     -((group.len() as f64) - 2.0).abs()
//! });
//! assert!(partition.covers(&[1, 2, 3, 4]));
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{
    ClusterError, ClusteringEngine, Objective, RlcsObjective, SearchStrategy, normalized_rlcs,
    rlcs,
};
pub use schema::{ClusteringConfig, ClusteringResult, Partition, SearchAlgorithm};

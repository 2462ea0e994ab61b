//! Cluster a handful of strings with the RLCS objective.
//!
//! Usage: cargo run --example cluster_strings [config.json] [strings...]

use std::process;

use seqcluster::{
    ClusteringConfig, ClusteringEngine, SearchAlgorithm, compute::normalized_combination_rlcs,
};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1).peekable();

    let config = match args.peek() {
        Some(path) if path.ends_with(".json") => {
            let path = args.next().unwrap_or_default();
            ClusteringConfig::load(&path).unwrap_or_else(|e| {
                eprintln!("Error loading {}: {}", path, e);
                process::exit(1);
            })
        }
        _ => ClusteringConfig {
            algorithm: SearchAlgorithm::BruteForce,
            ..Default::default()
        },
    };

    let mut inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        inputs = ["428efctesting123", "444efgtesting456", "424efgtesting456"]
            .map(String::from)
            .to_vec();
    }

    let engine = ClusteringEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let result = engine.cluster_sequences(&inputs).unwrap_or_else(|e| {
        eprintln!("Clustering failed: {}", e);
        process::exit(1);
    });

    println!("Combination:");
    for group in result.partition.groups() {
        println!("  Group: {:?}", group);
    }
    println!(
        "RLCS: {:.4}",
        normalized_combination_rlcs(result.partition.groups())
    );
    println!("Score: {:.4}", result.stats.score);
    println!(
        "Algorithm: {} ({} evaluations, {:.3}s)",
        result.stats.algorithm, result.stats.evaluations, result.stats.elapsed_seconds
    );

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

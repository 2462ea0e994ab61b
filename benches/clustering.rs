//! Benchmarks for partition search and RLCS similarity.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use seqcluster::{
    RlcsObjective,
    compute::{BruteForceSearch, GeneticSearch, HillClimbSearch, SearchStrategy, rlcs},
};

fn sample_sequences(count: usize) -> Vec<String> {
    let stems = ["testing", "efgabc", "qqzzyy"];
    (0..count)
        .map(|i| format!("{}{}{}", i % 7, stems[i % stems.len()], i * 37 % 1000))
        .collect()
}

fn bench_rlcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("rlcs");

    for length in [16, 64, 256, 1024] {
        let sequences: Vec<Vec<u8>> = (0..3u8)
            .map(|k| {
                (0..length)
                    .map(|i| b"abcdefgh"[(i * (k as usize + 3) / 2) % 8])
                    .collect()
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| rlcs(black_box(&sequences)));
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let objective = RlcsObjective::new(0.5);

    for count in [4, 6, 8] {
        let elements = sample_sequences(count);

        group.bench_with_input(BenchmarkId::new("brute_force", count), &count, |b, _| {
            b.iter(|| BruteForceSearch::new().search(black_box(&elements), &objective));
        });
        group.bench_with_input(BenchmarkId::new("hill_climb", count), &count, |b, _| {
            b.iter(|| HillClimbSearch::new().search(black_box(&elements), &objective));
        });
        group.bench_with_input(BenchmarkId::new("genetic", count), &count, |b, _| {
            b.iter(|| GeneticSearch::seeded(42).search(black_box(&elements), &objective));
        });
    }

    group.finish();
}

fn bench_genetic_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic_scaling");
    group.sample_size(10);
    let objective = RlcsObjective::new(0.5);

    for count in [12, 24, 48] {
        let elements = sample_sequences(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| GeneticSearch::seeded(7).search(black_box(&elements), &objective));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rlcs, bench_strategies, bench_genetic_scaling);
criterion_main!(benches);

//! Criterion benchmarks for tsp-anneal.
//!
//! Uses deterministic pseudo-random point clouds so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use tsp_anneal::anneal::brute_force;
use tsp_anneal::{AnnealConfig, Annealer, Point};
use u_numflow::random::create_rng;

fn cloud(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| Point::new(rng.random_range(0..1000), rng.random_range(0..1000)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let points = cloud(n, 42);
        let config = AnnealConfig::default()
            .with_brute_force_threshold(0)
            .with_max_steps(10_000);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut rng = create_rng(42);
                    let mut annealer = Annealer::new(black_box(p), c.clone(), &mut rng).unwrap();
                    black_box(annealer.run(&mut rng).map(|s| s.cost()))
                })
            },
        );
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);

    for &n in &[6usize, 7, 8] {
        let points = cloud(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, p| {
            b.iter(|| black_box(brute_force(black_box(p), false, 500_000)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_anneal, bench_brute_force);
criterion_main!(benches);

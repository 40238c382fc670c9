//! Criterion benchmarks for the annealing loop.
//!
//! Runs the full schedule on the built-in dataset and on random point
//! clouds of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_anneal::cities::romanian_cities;
use u_anneal::sa::{SaConfig, SaRunner};
use u_anneal::{Point, Tour, TspProblem};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                format!("p{i}"),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
            )
        })
        .collect()
}

fn bench_reference_run(c: &mut Criterion) {
    let problem = TspProblem::new(&romanian_cities()).expect("dataset is non-empty");
    let config = SaConfig::default().with_seed(42);
    c.bench_function("sa_reference_six_cities", |b| {
        b.iter(|| {
            let result = SaRunner::run(black_box(&problem), black_box(&config));
            black_box(result)
        })
    });
}

fn bench_random_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_random_cities");
    group.sample_size(10);

    for &n in &[10usize, 50, 100] {
        let problem = TspProblem::new(&random_points(n, 42)).expect("n > 0");
        let config = SaConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = SaRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_total_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_total_distance");

    for &n in &[10usize, 100, 1000] {
        let points = random_points(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter(|| {
                // Fresh tour each time so the memoized value is never hit.
                let tour = Tour::new(black_box(pts)).expect("n > 0");
                black_box(tour.total_distance())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reference_run,
    bench_random_instances,
    bench_total_distance
);
criterion_main!(benches);

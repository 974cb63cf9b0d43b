//! Benchmarks for Life grid generation steps.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use toroidal_life::{
    compute::LifeGrid,
    schema::{GridConfig, Pattern, Seed},
};

fn random_seed(threshold: f64) -> Seed {
    Seed {
        pattern: Pattern::Random {
            threshold,
            seed: Some(42),
        },
    }
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [50, 128, 256, 512, 1024] {
        let config = GridConfig {
            rows: size,
            columns: size,
        };
        let mut grid = LifeGrid::from_seed(&random_seed(0.15), &config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut grid).advance();
                });
            },
        );
    }

    group.finish();
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for threshold in [0.05, 0.15, 0.5] {
        let config = GridConfig {
            rows: 256,
            columns: 256,
        };
        let mut grid = LifeGrid::from_seed(&random_seed(threshold), &config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("threshold_{}", threshold)),
            &threshold,
            |b, _| {
                b.iter(|| {
                    black_box(&mut grid).advance();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_density);
criterion_main!(benches);

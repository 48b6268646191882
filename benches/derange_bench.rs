//! Criterion benchmarks for the derangement engine.
//!
//! Compares the three generator strategies across group sizes and measures
//! the constrained sampler and the exact counter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use derange::constraint::Blacklist;
use derange::count::subfactorial;
use derange::gen::{random_derangement, Strategy};
use derange::sampler::{Sampler, SamplerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generators(c: &mut Criterion) {
    for (name, strategy) in [
        ("rejection", Strategy::Rejection),
        ("backtrack", Strategy::Backtrack),
        ("uniform", Strategy::Uniform),
    ] {
        let mut group = c.benchmark_group(format!("generate_{name}"));
        for &n in &[10usize, 50, 200] {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| {
                    let perm = random_derangement(black_box(n), strategy, &mut rng).unwrap();
                    black_box(perm)
                })
            });
        }
        group.finish();
    }
}

fn bench_constrained_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_min_cycle_3");
    for &n in &[10usize, 50, 200] {
        let blacklist = Blacklist::new([(0, 1), (2, 3)]).unwrap();
        let config = SamplerConfig::default().with_min_cycle(3).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let result = Sampler::run(black_box(n), &blacklist, &config).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_subfactorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("subfactorial");
    for &n in &[30usize, 100, 300] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(subfactorial(black_box(n))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generators,
    bench_constrained_sampler,
    bench_subfactorial
);
criterion_main!(benches);

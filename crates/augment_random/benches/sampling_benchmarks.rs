//! Criterion benchmarks for the sampling facade.
//!
//! Compares drawing with a reused `RandomState` against provisioning a fresh
//! source per call, and measures shaped draws at a few output sizes.

use augment_random::rng::{new_source, RandomState};
use augment_random::sampling::{
    choice_index_with, normal_with, permutation_with, uniform, uniform_with, ChoiceParams,
    NormalParams, UniformParams,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark scalar draws: reused source vs. fresh source per call.
fn bench_scalar_provisioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_uniform");
    let params = UniformParams::new(-10.0, 10.0);

    group.bench_function("reused_state", |b| {
        let mut rng = RandomState::from_seed(42);
        b.iter(|| uniform_with(&mut rng, black_box(&params)).unwrap());
    });

    group.bench_function("fresh_state", |b| {
        b.iter(|| uniform(black_box(&params)).unwrap());
    });

    group.bench_function("new_source", |b| {
        b.iter(|| new_source().unwrap());
    });

    group.finish();
}

/// Benchmark shaped normal draws across output sizes.
fn bench_shaped_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("shaped_normal");

    for side in [8usize, 64, 256] {
        let params = NormalParams::new(0.0, 0.1).with_size((side, side));
        group.bench_with_input(BenchmarkId::from_parameter(side), &params, |b, params| {
            let mut rng = RandomState::from_seed(42);
            b.iter(|| normal_with(&mut rng, black_box(params)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark permutation and weighted choice.
fn bench_sequence_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for n in [16usize, 1024, 65536] {
        group.bench_with_input(BenchmarkId::new("permutation", n), &n, |b, &n| {
            let mut rng = RandomState::from_seed(42);
            b.iter(|| permutation_with(&mut rng, black_box(n)));
        });

        let p = vec![1.0 / n as f64; n];
        let params = ChoiceParams::default()
            .with_size(n / 2)
            .with_replace(false)
            .with_p(p);
        group.bench_with_input(BenchmarkId::new("weighted_choice", n), &params, |b, params| {
            let mut rng = RandomState::from_seed(42);
            b.iter(|| choice_index_with(&mut rng, n, black_box(params)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_provisioning,
    bench_shaped_normal,
    bench_sequence_ops
);
criterion_main!(benches);

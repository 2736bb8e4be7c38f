use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use resample_bootstrap::Resampler;
use resample_core::{Acceleration, Arg, StatExpr};

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strategies");
    let stat = StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X);

    for &size in &[100, 1000] {
        let x = generate_normal_data(size, 10.0, 2.0, 42);
        let y = generate_normal_data(size, 11.0, 2.0, 43);

        group.bench_with_input(BenchmarkId::new("bs_1sample", size), &x, |b, x| {
            let mut r = Resampler::new().with_size(1000).with_seed(1);
            b.iter(|| r.bs_1sample(black_box(x), &StatExpr::mean(Arg::X)))
        });

        group.bench_with_input(BenchmarkId::new("bs_2sample", size), &(&x, &y), |b, (x, y)| {
            let mut r = Resampler::new().with_size(1000).with_seed(1);
            b.iter(|| r.bs_2sample(black_box(x), black_box(y), &stat))
        });

        group.bench_with_input(BenchmarkId::new("bs_pairs", size), &(&x, &y), |b, (x, y)| {
            let mut r = Resampler::new().with_size(1000).with_seed(1);
            b.iter(|| r.bs_pairs(black_box(x), black_box(y), &StatExpr::slope()))
        });

        group.bench_with_input(
            BenchmarkId::new("permutation_2sample", size),
            &(&x, &y),
            |b, (x, y)| {
                let mut r = Resampler::new().with_size(1000).with_seed(1);
                b.iter(|| r.permutation_2sample(black_box(x), black_box(y), &stat))
            },
        );
    }

    group.finish();
}

fn bench_evaluation_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("EvaluationPaths");
    let x = generate_normal_data(500, 0.0, 1.0, 7);
    let y = generate_normal_data(500, 0.0, 1.0, 8);

    let lowered = StatExpr::correlation();
    let opaque = StatExpr::custom2("dot", |a, b| {
        Ok(a.iter().zip(b).map(|(p, q)| p * q).sum::<f64>())
    });

    for (label, acceleration, stat) in [
        ("compiled", Acceleration::Auto, &lowered),
        ("interpreted", Acceleration::Disabled, &lowered),
        ("fallback", Acceleration::Auto, &opaque),
    ] {
        group.bench_function(label, |b| {
            let mut r = Resampler::new()
                .with_size(1000)
                .with_seed(1)
                .with_acceleration(acceleration);
            b.iter(|| r.bs_pairs(black_box(&x), black_box(&y), stat))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_evaluation_paths);
criterion_main!(benches);

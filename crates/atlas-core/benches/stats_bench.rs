use atlas_core::stats::{linear_regression, quantile_sorted, tukey_fence};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_sorted(n: usize) -> Vec<f64> {
    // deterministic pseudo-random walk, sorted
    let mut v = Vec::with_capacity(n);
    let mut x = 0.0f64;
    for i in 0..n {
        x += ((i * 2654435761) % 1000) as f64 / 1000.0;
        v.push(x);
    }
    v
}

fn bench_quantiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantiles");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_sorted(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            b.iter(|| {
                let _ = black_box(quantile_sorted(d, 0.25));
                let _ = black_box(quantile_sorted(d, 0.5));
                let _ = black_box(quantile_sorted(d, 0.75));
            });
        });
    }
    group.finish();
}

fn bench_tukey(c: &mut Criterion) {
    let data = gen_sorted(10_000);
    c.bench_function("tukey_fence_10k", |b| {
        b.iter(|| {
            let _ = black_box(tukey_fence(&data));
        });
    });
}

fn bench_regression(c: &mut Criterion) {
    let xs = gen_sorted(10_000);
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
    c.bench_function("ols_10k", |b| {
        b.iter(|| {
            let _ = black_box(linear_regression(&xs, &ys));
        });
    });
}

criterion_group!(benches, bench_quantiles, bench_tukey, bench_regression);
criterion_main!(benches);

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the bin-mapping kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textviz::bins::{locate_bin, locate_bins};

fn bins_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bins");

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<f64> = (0..size).map(|i| f64::from(i) * 0.37 % 100.0).collect();

        group.bench_with_input(BenchmarkId::new("locate_bin", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0i64;
                for &v in black_box(&values) {
                    acc += locate_bin(v, 50, 0.0, 100.0);
                }
                acc
            });
        });

        group.bench_with_input(BenchmarkId::new("locate_bins", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for &v in black_box(&values) {
                    let [(_, w1), (_, w2)] = locate_bins(v, 50, 0.0, 100.0);
                    acc += w1 + w2;
                }
                acc
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bins_benchmark);
criterion_main!(benches);

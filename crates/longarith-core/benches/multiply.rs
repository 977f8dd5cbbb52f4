//! Criterion benchmarks for schoolbook and Karatsuba multiplication.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use longarith_core::{multiply_karatsuba_with, multiply_schoolbook, Base, KaratsubaConfig};

fn operand(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            i32::try_from((state >> 33) % 10_000).unwrap()
        })
        .collect()
}

fn bench_multiply(c: &mut Criterion) {
    let base = Base::DEFAULT;
    let lens: Vec<usize> = vec![64, 256, 1_024, 4_096];

    let mut group = c.benchmark_group("Schoolbook");
    for &len in &lens {
        let (a, b) = (operand(len, 1), operand(len, 2));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            let mut out = vec![0i64; 2 * len];
            bench.iter(|| multiply_schoolbook(base, &mut out, &a, &b).unwrap());
        });
    }
    group.finish();

    let config = KaratsubaConfig::default();
    let mut group = c.benchmark_group("Karatsuba");
    for &len in &lens {
        let (a, b) = (operand(len, 1), operand(len, 2));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| multiply_karatsuba_with(&config, base, &a, &b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);

// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Core - add/sub/mul/div on two scaled values
// 2. Mixed - the same operators against a plain integer
// 3. Power - linear cost in the exponent
// 4. Parsing - decimal string to fixed-point
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_point::prelude::*;
use std::hint::black_box;

// ============================================================================
// Core Arithmetic Benchmarks
// ============================================================================

fn benchmark_core_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_arithmetic");

    let a: Unsigned = "150.3".parse().unwrap();
    let b: Unsigned = "3.2".parse().unwrap();

    group.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(a).checked_add(black_box(b)))
    });
    group.bench_function("checked_sub", |bench| {
        bench.iter(|| black_box(a).checked_sub(black_box(b)))
    });
    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(a).checked_mul(black_box(b)))
    });
    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(a).checked_div(black_box(b)))
    });

    // Raw product wider than 256 bits
    let big = Unsigned::MAX;
    group.bench_function("checked_mul_wide", |bench| {
        bench.iter(|| black_box(big).checked_mul(black_box(Unsigned::ONE)))
    });

    group.finish();
}

// ============================================================================
// Mixed Arithmetic Benchmarks
// ============================================================================

fn benchmark_mixed_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_arithmetic");

    let a: Unsigned = "150.3".parse().unwrap();
    let n = U256::from(3u64);

    group.bench_function("checked_add_unscaled", |bench| {
        bench.iter(|| black_box(a).checked_add_unscaled(black_box(n)))
    });
    group.bench_function("checked_mul_unscaled", |bench| {
        bench.iter(|| black_box(a).checked_mul_unscaled(black_box(n)))
    });
    group.bench_function("checked_div_unscaled", |bench| {
        bench.iter(|| black_box(a).checked_div_unscaled(black_box(n)))
    });
    group.bench_function("checked_unscaled_div", |bench| {
        bench.iter(|| Unsigned::checked_unscaled_div(black_box(n), black_box(a)))
    });

    group.finish();
}

// ============================================================================
// Power Benchmarks
// ============================================================================

fn benchmark_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");

    let base: Unsigned = "1.0001".parse().unwrap();

    for exponent in [1u64, 10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("checked_pow", exponent),
            exponent,
            |bench, &exponent| bench.iter(|| black_box(base).checked_pow(black_box(exponent))),
        );
    }

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for input in ["42", "150.3", "0.333333333333333333"].iter() {
        group.bench_with_input(BenchmarkId::new("from_str", input), input, |bench, input| {
            bench.iter(|| black_box(*input).parse::<Unsigned>())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_core_arithmetic,
    benchmark_mixed_arithmetic,
    benchmark_power,
    benchmark_parsing
);
criterion_main!(benches);

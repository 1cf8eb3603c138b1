//! Benchmarks for the core sequence algorithms
//!
//! Run with: `cargo bench --bench sequence_ops`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqkit_core::{
    distinct, filter, group_by, map, max_or_null, sorted, sorted_by_descending, sum, take,
};
use smallvec::SmallVec;

fn pseudo_random(size: usize) -> Vec<i64> {
    // Deterministic LCG so every run sorts the same input.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..size)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 33) as i64 % 1000
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [16, 256, 4096] {
        let input = pseudo_random(size);

        group.bench_with_input(BenchmarkId::new("map", size), &input, |b, input| {
            b.iter(|| black_box(map(input, |x| x * 2)));
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &input, |b, input| {
            b.iter(|| black_box(filter(input, |x| x % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("distinct", size), &input, |b, input| {
            b.iter(|| black_box(distinct(input)));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [16, 256, 4096] {
        let input = pseudo_random(size);
        let floats: Vec<f64> = input.iter().map(|&x| x as f64).collect();

        group.bench_with_input(BenchmarkId::new("sum_i64", size), &input, |b, input| {
            b.iter(|| black_box(sum(input)));
        });

        group.bench_with_input(BenchmarkId::new("max_f64", size), &floats, |b, floats| {
            b.iter(|| black_box(max_or_null(floats).copied()));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [16, 256, 4096] {
        let input = pseudo_random(size);

        group.bench_with_input(BenchmarkId::new("sorted", size), &input, |b, input| {
            b.iter(|| black_box(sorted(input)));
        });

        group.bench_with_input(
            BenchmarkId::new("sorted_by_descending", size),
            &input,
            |b, input| {
                b.iter(|| black_box(sorted_by_descending(input, |x| x % 10)));
            },
        );
    }

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");

    // Same algorithm over different containers
    let input = pseudo_random(64);
    let small: SmallVec<[i64; 64]> = input.iter().copied().collect();

    group.bench_function("group_by/Vec", |b| {
        b.iter(|| black_box(group_by(&input, |x| x % 8)));
    });
    group.bench_function("group_by/SmallVec<64>", |b| {
        b.iter(|| black_box(group_by(&small, |x| x % 8)));
    });
    group.bench_function("take/Vec", |b| {
        b.iter(|| black_box(take(&input, 32)));
    });

    group.finish();
}

criterion_group!(benches, bench_transform, bench_aggregate, bench_sort, bench_views);
criterion_main!(benches);

use std::iter::repeat_with;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use qsort_demo::qsort::{normal, stack};
use qsort_demo::{Strategy, Workload};
use rand::{thread_rng, Rng};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

pub fn qsort_bench(c: &mut Criterion) {
    let mut rand = thread_rng();

    for shape in ["random", "ascending", "descending"] {
        let mut group = c.benchmark_group(format!("qsort {shape}"));

        for size in SIZES {
            let xs: Vec<i32> = match shape {
                "ascending" => (0..size as i32).collect(),
                "descending" => (0..size as i32).rev().collect(),
                _ => repeat_with(|| rand.gen::<i32>()).take(size).collect(),
            };

            group.bench_with_input(BenchmarkId::new("recursive", size), &xs, |b, xs| {
                b.iter_batched(
                    || xs.clone(),
                    |mut xs| normal::qsort(&mut xs),
                    BatchSize::SmallInput,
                );
            });

            group.bench_with_input(BenchmarkId::new("stack", size), &xs, |b, xs| {
                b.iter_batched(
                    || xs.clone(),
                    |mut xs| stack::qsort(&mut xs),
                    BatchSize::SmallInput,
                );
            });

            group.bench_with_input(BenchmarkId::new("std", size), &xs, |b, xs| {
                b.iter_batched(
                    || xs.clone(),
                    |mut xs| xs.sort_unstable(),
                    BatchSize::SmallInput,
                );
            });
        }

        group.finish();
    }
}

pub fn workload_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload round");

    for strategy in [Strategy::Recursive, Strategy::Stack] {
        let workload = Workload {
            rounds: 1,
            strategy,
            ..Workload::default()
        };
        let Ok(seed) = workload.seed() else {
            continue;
        };

        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter_batched(
                || seed.clone(),
                |mut xs| {
                    workload.run_on(&mut xs);
                    black_box(xs)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, qsort_bench, workload_bench);
criterion_main!(benches);

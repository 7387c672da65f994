use std::collections::HashSet as StdHashSet;
use std::hint::black_box;

use chain_hash::ChainedHashTable;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashSet as HashbrownHashSet;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn make_values(rng: &mut SmallRng, count: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..count as u64).map(|_| rng.random()).collect();
    values.shuffle(rng);
    values
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(OsRng.try_next_u64().unwrap());
    let mut group = c.benchmark_group("insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let values = make_values(&mut rng, size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let mut table: ChainedHashTable<u64> = ChainedHashTable::new();
                    for value in values {
                        table.insert(value);
                    }
                    black_box(table)
                },
                BatchSize::PerIteration,
            );
        });

        group.bench_function(format!("std_hash_set/{size}"), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let mut set: StdHashSet<u64> = StdHashSet::new();
                    for value in values {
                        set.insert(value);
                    }
                    black_box(set)
                },
                BatchSize::PerIteration,
            );
        });

        group.bench_function(format!("hashbrown_hash_set/{size}"), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let mut set: HashbrownHashSet<u64> = HashbrownHashSet::new();
                    for value in values {
                        set.insert(value);
                    }
                    black_box(set)
                },
                BatchSize::PerIteration,
            );
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(OsRng.try_next_u64().unwrap());
    let mut group = c.benchmark_group("contains");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let values = make_values(&mut rng, size);
        // Half the probes hit, half miss.
        let probes: Vec<u64> = values
            .iter()
            .copied()
            .take(size / 2)
            .chain((0..size as u64 / 2).map(|_| rng.random()))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));

        let mut table: ChainedHashTable<u64> = ChainedHashTable::new();
        let mut std_set: StdHashSet<u64> = StdHashSet::new();
        let mut brown_set: HashbrownHashSet<u64> = HashbrownHashSet::new();
        for &value in &values {
            table.insert(value);
            std_set.insert(value);
            brown_set.insert(value);
        }

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for probe in &probes {
                    if table.contains(black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_function(format!("std_hash_set/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for probe in &probes {
                    if std_set.contains(black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_function(format!("hashbrown_hash_set/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for probe in &probes {
                    if brown_set.contains(black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);

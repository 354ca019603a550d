//! Paa Perfect Hash Benchmarks
//!
//! Benchmarks for table construction and lookup, compared against the sorted
//! index and the standard library's `HashMap`. The benchmarks are implemented
//! using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::collections::HashMap;
use std::time::Duration;

use paa_phf_lib::data_structures::paa_perfect_hash::{
    BucketSort, PaaPerfectHash, PaaPerfectHashConfig,
};
use paa_phf_lib::data_structures::paa_sorted_index::PaaSortedIndex;

fn make_items(size: usize) -> Vec<(String, usize)> {
    (0..size).map(|i| (format!("key_{i:08}"), i)).collect()
}

/// Benchmark table construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("paa_perfect_hash_build");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let items = make_items(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for sort in [BucketSort::Partition, BucketSort::Merge] {
            group.bench_with_input(
                BenchmarkId::new(format!("{sort:?}"), size),
                &items,
                |b, items| {
                    let config = PaaPerfectHashConfig::new().with_bucket_sort(sort);
                    b.iter(|| {
                        PaaPerfectHash::with_config(black_box(items.clone()), config.clone())
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark lookups of present and absent keys
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("paa_perfect_hash_lookup");
    group.measurement_time(Duration::from_secs(2));

    for size in [1_000, 100_000].iter() {
        let items = make_items(*size);
        let probes: Vec<String> = (0..1_000)
            .map(|i| format!("key_{:08}", (i * 7_919) % (size * 2)))
            .collect();

        let table = PaaPerfectHash::new(items.clone()).unwrap();
        let index = PaaSortedIndex::new(items.clone()).unwrap();
        let map: HashMap<String, usize> = items.into_iter().collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("perfect_hash", size), &probes, |b, probes| {
            b.iter(|| {
                probes
                    .iter()
                    .filter(|k| table.contains_key(black_box(k.as_str())))
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("sorted_index", size), &probes, |b, probes| {
            b.iter(|| {
                probes
                    .iter()
                    .filter(|k| index.contains_key(black_box(k.as_str())))
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("hash_map", size), &probes, |b, probes| {
            b.iter(|| {
                probes
                    .iter()
                    .filter(|k| map.contains_key(black_box(k.as_str())))
                    .count()
            });
        });
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_build, bench_lookup
}

criterion_main!(benches);

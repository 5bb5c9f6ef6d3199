use core::hint::black_box;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use ulidkey::{
    AbbrevConfig, GenerateError, OsRandom, RandSource, SortAbbreviator, SystemClock, ThreadRandom,
    TimeSource, Ulid, UlidGenerator, cmp, hash, sort,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> Result<u64, GenerateError> {
        Ok(self.millis)
    }
}

// Number of IDs processed per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

fn sample_ids(n: usize) -> Vec<Ulid> {
    let generator = UlidGenerator::new(SystemClock, ThreadRandom);
    (0..n)
        .map(|_| generator.try_generate().unwrap())
        .collect()
}

/// Benchmarks a single-threaded generator.
fn bench_generator<T, R>(c: &mut Criterion, group_name: &str, generator: UlidGenerator<T, R>)
where
    T: TimeSource,
    R: RandSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.try_generate().unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmarks one shared generator across several threads released together.
fn bench_generator_contended<T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator: UlidGenerator<T, R>,
) where
    T: TimeSource + Sync,
    R: RandSource + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));
        group.bench_function(format!("threads/{threads}/elems/{TOTAL_IDS}"), |b| {
            b.iter_custom(|iters| {
                let barrier = Arc::new(Barrier::new(threads + 1));
                let generator = &generator;
                scope(|s| {
                    for _ in 0..threads {
                        let barrier = Arc::clone(&barrier);
                        s.spawn(move || {
                            barrier.wait();
                            for _ in 0..iters {
                                for _ in 0..TOTAL_IDS {
                                    black_box(generator.try_generate().unwrap());
                                }
                            }
                        });
                    }
                    let start = Instant::now();
                    barrier.wait();
                    start
                })
                .elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_mock_generate(c: &mut Criterion) {
    bench_generator(
        c,
        "mock/sequential/thread_random",
        UlidGenerator::new(FixedMockTime { millis: 1 }, ThreadRandom),
    );
}

fn benchmark_system_generate(c: &mut Criterion) {
    bench_generator(
        c,
        "system/sequential/thread_random",
        UlidGenerator::new(SystemClock, ThreadRandom),
    );
    bench_generator(
        c,
        "system/sequential/os_random",
        UlidGenerator::new(SystemClock, OsRandom),
    );
}

fn benchmark_contended_generate(c: &mut Criterion) {
    bench_generator_contended(
        c,
        "system/contended/thread_random",
        UlidGenerator::new(SystemClock, ThreadRandom),
    );
}

fn benchmark_base32(c: &mut Criterion) {
    let ids = sample_ids(TOTAL_IDS);
    let texts: Vec<String> = ids.iter().map(ToString::to_string).collect();

    let mut group = c.benchmark_group("base32");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("encode/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for id in &ids {
                black_box(black_box(id).encode());
            }
        });
    });

    group.bench_function(format!("encode_to_buf/elems/{TOTAL_IDS}"), |b| {
        let mut buf = [0_u8; ulidkey::ULID_ENCODED_LEN];
        b.iter(|| {
            for id in &ids {
                black_box(black_box(id).encode_to_buf(&mut buf));
            }
        });
    });

    group.bench_function(format!("decode/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for text in &texts {
                black_box(Ulid::decode(black_box(text)).unwrap());
            }
        });
    });

    group.finish();
}

fn benchmark_compare_and_hash(c: &mut Criterion) {
    let ids = sample_ids(TOTAL_IDS + 1);

    let mut group = c.benchmark_group("ops");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("compare/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for pair in ids.windows(2) {
                black_box(cmp::compare(black_box(&pair[0]), black_box(&pair[1])));
            }
        });
    });

    group.bench_function(format!("hash/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for id in &ids[..TOTAL_IDS] {
                black_box(hash::hash(black_box(id)));
            }
        });
    });

    group.bench_function(format!("hash_extended/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for id in &ids[..TOTAL_IDS] {
                black_box(hash::hash_extended(black_box(id), 42));
            }
        });
    });

    group.bench_function(format!("abbrev_convert/elems/{TOTAL_IDS}"), |b| {
        b.iter_batched_ref(
            SortAbbreviator::new,
            |abbrev| {
                for id in &ids[..TOTAL_IDS] {
                    black_box(abbrev.convert(black_box(id)));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Compares the abbreviated sort against a plain full-comparison sort, for
/// distinct timestamps and for one shared timestamp.
fn benchmark_sort(c: &mut Criterion) {
    const LEN: usize = 100_000;

    let mut distinct = sample_ids(LEN);
    distinct.reverse();
    let shared: Vec<Ulid> = {
        let generator = UlidGenerator::new(FixedMockTime { millis: 1 }, ThreadRandom);
        (0..LEN).map(|_| generator.try_generate().unwrap()).collect()
    };

    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(LEN as u64));
    group.sample_size(20);

    for (name, input) in [("distinct", &distinct), ("shared_prefix", &shared)] {
        group.bench_function(format!("{name}/abbreviated"), |b| {
            b.iter_batched(
                || input.clone(),
                |mut values| black_box(sort::sort(&mut values)),
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("{name}/never_abort"), |b| {
            let config = AbbrevConfig::default().with_min_rows(usize::MAX);
            b.iter_batched(
                || input.clone(),
                |mut values| black_box(sort::sort_with_config(&mut values, config)),
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("{name}/full_compare"), |b| {
            b.iter_batched(
                || input.clone(),
                |mut values| {
                    values.sort_unstable_by(cmp::compare);
                    black_box(values)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mock_generate,
    benchmark_system_generate,
    benchmark_contended_generate,
    benchmark_base32,
    benchmark_compare_and_hash,
    benchmark_sort,
);
criterion_main!(benches);

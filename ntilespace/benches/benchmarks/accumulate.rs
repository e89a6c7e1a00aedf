use std::{
    cmp::{max, min},
    time::Instant,
};

use criterion::{BenchmarkId, Criterion, Throughput};
use ntilespace::{Bucketizer, Domain};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn accumulate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("accumulate");
    group.throughput(Throughput::Elements(1));

    // Cardinality drives the cost of every insert.
    for distinct in [16_i64, 1_024, 65_536] {
        group.bench_with_input(
            BenchmarkId::new("integer", distinct),
            &distinct,
            |bencher, &distinct| {
                let mut bucketizer =
                    Bucketizer::new(Domain::Integer, 10).expect("valid bucket count");
                let mut i = 0_i64;
                bencher.iter(|| {
                    i = i.wrapping_add(7_919);
                    bucketizer
                        .accumulate(i.rem_euclid(distinct))
                        .expect("integer");
                });
            },
        );
    }

    group.bench_function("float-random", |bencher| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut bucketizer = Bucketizer::new(Domain::Float, 10).expect("valid bucket count");
        bencher.iter(|| {
            let value: f64 = rng.gen_range(0.0..1_000.0);
            bucketizer.accumulate((value * 100.0).round() / 100.0).expect("finite");
        });
    });

    // Partial runs on worker threads, merged at the end.
    for threads in [1, 4, 16] {
        group.bench_function(format!("merge-concurrency-{threads:02}"), |bencher| {
            bencher.iter_custom(|iterations| {
                let thread_count = max(1, min(threads, iterations));
                let iterations_per_thread = iterations / thread_count;

                let start = Instant::now();
                let partials: Vec<Bucketizer> = std::thread::scope(|scope| {
                    let handles: Vec<_> = (0..thread_count)
                        .map(|_| {
                            scope.spawn(|| {
                                let mut partial = Bucketizer::new(Domain::Integer, 10)
                                    .expect("valid bucket count");
                                for i in 0..iterations_per_thread {
                                    partial.accumulate((i % 512) as i64).expect("integer");
                                }
                                partial
                            })
                        })
                        .collect();
                    handles
                        .into_iter()
                        .map(|handle| handle.join().expect("worker does not panic"))
                        .collect()
                });
                let mut combined =
                    Bucketizer::new(Domain::Integer, 10).expect("valid bucket count");
                for partial in partials {
                    combined.merge(partial).expect("compatible runs");
                }
                criterion::black_box(combined);

                start.elapsed()
            });
        });
    }
}

criterion::criterion_group!(benches, accumulate);

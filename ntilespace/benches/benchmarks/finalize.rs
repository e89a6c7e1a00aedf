use criterion::{BatchSize, BenchmarkId, Criterion};
use ntilespace::{Bucketizer, Domain};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;

fn filled(domain: Domain, distinct: usize) -> Bucketizer {
    let mut rng = StdRng::seed_from_u64(7);
    let mut bucketizer = Bucketizer::new(domain, 20).expect("valid bucket count");
    for i in 0..distinct {
        let count = rng.gen_range(1..100);
        let result = match domain {
            Domain::Integer => bucketizer.accumulate_count(i as i64, count),
            Domain::Float => bucketizer.accumulate_count(i as f64 / 8.0, count),
            Domain::Decimal => {
                bucketizer.accumulate_count(Decimal::new(i as i64, 2), count)
            }
        };
        result.expect("value matches the domain");
    }
    bucketizer
}

pub fn finalize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("finalize");

    for domain in [Domain::Integer, Domain::Float, Domain::Decimal] {
        for distinct in [1_000, 100_000] {
            let bucketizer = filled(domain, distinct);
            group.bench_with_input(
                BenchmarkId::new(domain.to_string(), distinct),
                &bucketizer,
                |bencher, bucketizer| {
                    bencher.iter_batched(
                        || bucketizer.clone(),
                        |bucketizer| bucketizer.finalize().expect("not empty"),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }
}

criterion::criterion_group!(benches, finalize);

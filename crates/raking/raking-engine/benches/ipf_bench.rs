//! IPF benchmarks: full runs and single rake passes over synthetic polls.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use raking_core::*;
use raking_engine::{l1_error, rake_dimension, run_ipf, Marginal};

#[path = "../tests/common/mod.rs"]
mod common;

use common::{synthetic_poll, OHIO};

fn targets() -> TargetSpec {
    TargetSpec::builder()
        .dimension(&[
            (AgeBracket::From18To29, 0.2),
            (AgeBracket::From30To44, 0.25),
            (AgeBracket::From45To64, 0.35),
            (AgeBracket::Over65, 0.2),
        ])
        .dimension(&[(Gender::Male, 0.48), (Gender::Female, 0.52)])
        .dimension(&[
            (Race::White, 0.6),
            (Race::Black, 0.15),
            (Race::Hispanic, 0.15),
            (Race::Asian, 0.1),
        ])
        .dimension(&[
            (IncomeBracket::Under50k, 0.4),
            (IncomeBracket::From50kTo100k, 0.35),
            (IncomeBracket::Over100k, 0.25),
        ])
        .dimension(&[
            (Urbanity::Rural, 0.25),
            (Urbanity::Urban, 0.35),
            (Urbanity::Suburban, 0.4),
        ])
        .dimension(&[
            (Education::CollegeDegree, 0.35),
            (Education::NoCollegeDegree, 0.65),
        ])
        .build(1e-5)
        .unwrap()
}

fn bench_run_ipf(c: &mut Criterion) {
    let targets = targets();
    let mut group = c.benchmark_group("run_ipf");
    for n in [100u64, 1_000, 10_000] {
        let records = synthetic_poll(OHIO, n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| run_ipf(black_box(records), &targets).unwrap())
        });
    }
    group.finish();
}

fn bench_single_rake_pass(c: &mut Criterion) {
    let targets = targets();
    let records = synthetic_poll(OHIO, 1_000, 42);
    c.bench_function("rake_pass_1000", |b| {
        b.iter(|| {
            let mut weights = vec![1.0; records.len()];
            for dimension in Dimension::ALL {
                let current = Marginal::compute(&records, &weights, dimension);
                rake_dimension(
                    &records,
                    &mut weights,
                    dimension,
                    targets.shares(dimension),
                    &current,
                );
            }
            black_box(weights)
        })
    });
}

fn bench_l1_error(c: &mut Criterion) {
    let targets = targets();
    let records = synthetic_poll(OHIO, 1_000, 42);
    let weights = vec![1.0; records.len()];
    c.bench_function("l1_error_1000", |b| {
        b.iter(|| l1_error(black_box(&records), &weights, &targets))
    });
}

criterion_group!(benches, bench_run_ipf, bench_single_rake_pass, bench_l1_error);
criterion_main!(benches);

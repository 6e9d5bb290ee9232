//! Benchmarks for schema derivation and YAML round trips
//!
//! Platform: Cross-platform (uses in-memory sample layouts, CI-safe)

use criterion::{Criterion, criterion_group, criterion_main};
use flatframe::test_utils::{FooFrame, Telemetry};
use flatframe::{FrameLayout, LayoutSchema};
use std::hint::black_box;

fn bench_schema_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_derivation");

    group.bench_function("foo_frame", |b| b.iter(|| black_box(FooFrame::schema())));
    group.bench_function("telemetry", |b| b.iter(|| black_box(Telemetry::schema())));

    let schema = Telemetry::schema();
    group.bench_function("validate", |b| b.iter(|| black_box(schema.validate().is_ok())));

    group.finish();
}

fn bench_yaml(c: &mut Criterion) {
    let schema = Telemetry::schema();
    let yaml = schema.to_yaml().expect("schema serializes");

    let mut group = c.benchmark_group("schema_yaml");

    group.bench_function("to_yaml", |b| b.iter(|| black_box(schema.to_yaml().unwrap())));
    group.bench_function("from_yaml", |b| {
        b.iter(|| black_box(LayoutSchema::from_yaml(black_box(&yaml)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_schema_derivation, bench_yaml);
criterion_main!(benches);

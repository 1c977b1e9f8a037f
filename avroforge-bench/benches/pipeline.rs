//! Code generation pipeline benchmarks.

use avroforge_bench::fixtures::{schema_forest, wide_record};
use avroforge_codegen::{LinkOptions, compile_namespace_map, compile_schemas, link_module};
use avroforge_schema::{Schema, parse_namespaces, parse_schema};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn parse_forest(documents: &[String]) -> Vec<Schema> {
    documents
        .iter()
        .map(|document| parse_schema(document).expect("Failed to parse fixture"))
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let document = wide_record("Wide", "bench", 64).to_string();

    c.bench_function("parse_wide_record", |b| {
        b.iter(|| parse_schema(black_box(&document)))
    });
}

fn benchmark_stages(c: &mut Criterion) {
    let schemas = parse_forest(&schema_forest(4, 8, 16));
    let map = parse_namespaces(&schemas).expect("Failed to partition fixture");
    let compiled = compile_namespace_map(&map).expect("Failed to compile fixture");
    let options = LinkOptions::new().vendor_runtime(false);

    c.bench_function("partition_namespaces", |b| {
        b.iter(|| parse_namespaces(black_box(&schemas)))
    });

    c.bench_function("compile_namespace_map", |b| {
        b.iter(|| compile_namespace_map(black_box(&map)))
    });

    c.bench_function("link_module", |b| {
        b.iter(|| link_module(black_box(&compiled), &options))
    });
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_schemas");

    for records in [1, 8, 32] {
        let schemas = parse_forest(&schema_forest(2, records, 16));
        group.throughput(Throughput::Elements((2 * records) as u64));
        group.bench_function(format!("{}_records", 2 * records), |b| {
            b.iter(|| compile_schemas(black_box(&schemas), &LinkOptions::new()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_stages, benchmark_end_to_end);
criterion_main!(benches);

//! Driver encoding and decoding benchmarks.

use avroforge_bench::fixtures::{wide_datum, wide_record};
use avroforge_core::{AvroDriver, ApacheAvroBinaryDriver, JsonDriver};
use avroforge_schema::parse_schema_value;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const FIELDS: usize = 32;

fn benchmark_driver(c: &mut Criterion, name: &str, driver: &dyn AvroDriver) {
    let raw = wide_record("Wide", "bench", FIELDS);
    let schema = raw.to_string();
    let canonical = parse_schema_value(&raw)
        .expect("Failed to parse fixture")
        .canonical_form();
    let datum = wide_datum(FIELDS);

    let mut encoded = Vec::new();
    driver
        .write(&canonical, &schema, &datum, &mut encoded)
        .expect("Failed to encode fixture");

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("write", |b| {
        let mut buffer = Vec::with_capacity(encoded.len());
        b.iter(|| {
            buffer.clear();
            driver.write(&canonical, &schema, black_box(&datum), &mut buffer)
        })
    });

    group.bench_function("read", |b| {
        b.iter(|| driver.read(&canonical, &schema, &mut black_box(encoded.as_slice())))
    });

    group.finish();
}

fn benchmark_binary(c: &mut Criterion) {
    benchmark_driver(c, "apache_avro_binary_driver", &ApacheAvroBinaryDriver::new());
}

fn benchmark_json(c: &mut Criterion) {
    benchmark_driver(c, "json_driver", &JsonDriver::new());
}

criterion_group!(benches, benchmark_binary, benchmark_json);
criterion_main!(benches);

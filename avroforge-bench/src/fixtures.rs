//! Synthetic schemas and data for benchmarks.

use avroforge_core::{Datum, RecordDatum};
use serde_json::{Value, json};

/// Field types cycled through by [`wide_record`].
const FIELD_TYPES: [&str; 5] = ["long", "string", "double", "boolean", "ints"];

fn field_type(index: usize) -> Value {
    match FIELD_TYPES[index % FIELD_TYPES.len()] {
        "ints" => json!({"type": "array", "items": "int"}),
        primitive => json!(primitive),
    }
}

/// Record schema with `fields` fields named `f0`, `f1`, ...
#[must_use]
pub fn wide_record(name: &str, namespace: &str, fields: usize) -> Value {
    let fields: Vec<Value> = (0..fields)
        .map(|index| json!({"name": format!("f{}", index), "type": field_type(index)}))
        .collect();
    json!({"type": "record", "name": name, "namespace": namespace, "fields": fields})
}

/// Schema documents spread over `namespaces` namespaces, each holding
/// `records` records of `fields` fields.
#[must_use]
pub fn schema_forest(namespaces: usize, records: usize, fields: usize) -> Vec<String> {
    (0..namespaces)
        .flat_map(|ns| {
            (0..records).map(move |record| {
                wide_record(&format!("Record{}", record), &format!("bench.ns{}", ns), fields)
                    .to_string()
            })
        })
        .collect()
}

/// Datum matching [`wide_record`] with the same field count.
#[must_use]
pub fn wide_datum(fields: usize) -> Datum {
    let mut record = RecordDatum::with_capacity(fields);
    for index in 0..fields {
        let value = match FIELD_TYPES[index % FIELD_TYPES.len()] {
            "long" => Datum::Long(index as i64 * 1_000),
            "string" => Datum::String(format!("value-{}", index)),
            "double" => Datum::Double(index as f64 * 0.5),
            "boolean" => Datum::Boolean(index % 2 == 0),
            _ => Datum::Array((0..8).map(Datum::Int).collect()),
        };
        record.insert(format!("f{}", index), value);
    }
    Datum::Record(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_agree() {
        let schema = avroforge_schema::parse_schema_value(&wide_record("Wide", "bench", 7))
            .expect("Failed to parse fixture");
        let Datum::Record(record) = wide_datum(7) else {
            panic!("expected record datum");
        };
        assert_eq!(record.len(), 7);
        assert!(schema.canonical_form().contains(r#""name":"f6""#));
        assert_eq!(schema_forest(2, 3, 4).len(), 6);
    }
}

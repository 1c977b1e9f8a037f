//! Writes a record datum with each built-in driver and reads it back.
//!
//! Run with: `cargo run --example roundtrip`

use avroforge::prelude::*;

const SCHEMA: &str = r#"{"type":"record","name":"Quote","namespace":"com.acme","fields":[{"name":"symbol","type":"string"},{"name":"bid","type":"double"},{"name":"size","type":"long"}]}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let canonical = parse_schema(SCHEMA)?.canonical_form();

    let mut record = RecordDatum::with_capacity(3);
    record.insert("symbol", Datum::String("ACME".to_string()));
    record.insert("bid", Datum::Double(101.25));
    record.insert("size", Datum::Long(500));
    let datum = Datum::Record(record);

    let registry = DriverRegistry::new();
    for module in registry.list() {
        let driver = registry.load(module)?;
        let mut buffer = Vec::new();
        driver.write(&canonical, SCHEMA, &datum, &mut buffer)?;
        let decoded = driver.read(&canonical, SCHEMA, &mut buffer.as_slice())?;

        println!("[{}] {} bytes, round trip ok: {}", module, buffer.len(), decoded == datum);
    }
    Ok(())
}

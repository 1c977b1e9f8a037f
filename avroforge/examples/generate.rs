//! Generates a module tree from an inline schema and prints every unit.
//!
//! Run with: `cargo run --example generate`

use avroforge::prelude::*;

const SCHEMA: &str = r#"{
    "type": "record",
    "name": "Trade",
    "namespace": "com.acme.trading",
    "doc": "Executed trade.",
    "fields": [
        {"name": "id", "type": {"type": "string", "logicalType": "uuid"}},
        {"name": "symbol", "type": "string"},
        {"name": "side", "type": {"type": "enum", "name": "Side", "symbols": ["BUY", "SELL"]}},
        {"name": "quantity", "type": "long"},
        {"name": "executed", "type": {"type": "long", "logicalType": "timestamp-millis"}},
        {"name": "venue", "type": ["null", "string"]}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let schema = parse_schema(SCHEMA)?;
    let files = compile_schemas(&[schema], &LinkOptions::new().vendor_runtime(false))?;

    for (path, source) in &files {
        println!("// ===== {} =====", path);
        println!("{}", source);
    }
    Ok(())
}

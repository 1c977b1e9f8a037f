//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use avroforge::prelude::*;
//! ```

// Runtime contracts
pub use avroforge_core::{
    AvroEnum, AvroFixed, AvroFixedDecimal, AvroObject, AvroRecord, Decimal, FromDatum,
    RecordBuilder, ToDatum,
};
pub use avroforge_core::{CoreError, Datum, RecordDatum};
pub use avroforge_core::{Union2, Union3, Union4, Union5, Union6, Union7, Union8};

// Drivers
pub use avroforge_core::{
    ApacheAvroBinaryDriver, AvroDriver, DEFAULT_DRIVER, DriverProxy, DriverRegistry, JsonDriver,
};

// Schema types
pub use avroforge_schema::{AvroSchema, Schema, SchemaError, parse_schema, read_path};

// Code generation
pub use avroforge_codegen::{
    CodegenError, FileMap, LinkOptions, compile_path, compile_schemas, emit_file_map,
};

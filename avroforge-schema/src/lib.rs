//! # avroforge Schema
//!
//! Avro JSON schema model, parser and analysis passes.
//!
//! This crate provides:
//! - Avro 1.11 JSON schema parsing with namespace resolution
//! - Type definitions for schema nodes
//! - Canonical and raw JSON forms
//! - A uniform wrapper over schema and field nodes
//! - Namespace partitioning for code generation
//! - Schema file loading

pub mod canonical;
pub mod error;
pub mod lexer;
pub mod namespace;
pub mod parser;
pub mod types;
pub mod validation;
pub mod wrapper;

pub use canonical::canonical_name;
pub use error::{ParseError, SchemaError};
pub use lexer::{read_path, read_schema_file};
pub use namespace::{DEFAULT_NAMESPACE, NamespaceMap, parse_namespaces};
pub use parser::{SchemaParser, parse_schema, parse_schema_value};
pub use types::{
    ArraySchema, EnumSchema, Field, FixedDecimalSchema, FixedSchema, MAX_SCHEMA_DEPTH, MapSchema,
    Name, NamedKind, PrimitiveSchema, PrimitiveType, RecordSchema, ReferenceSchema, Schema,
    UnionSchema,
};
pub use wrapper::{AvroSchema, SchemaKind};

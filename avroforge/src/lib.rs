//! # avroforge
//!
//! Typed Rust code generation from Apache Avro schemas.
//!
//! avroforge reads Avro JSON schemas and emits a tree of Rust modules, one
//! per namespace, holding a struct per record, an enum per enum and a
//! newtype per fixed type. The generated types encode and decode through a
//! small runtime library that can be vendored into the tree.
//!
//! ## Features
//!
//! - **Typed records** - Private fields with getters, setters and builders
//! - **Namespace modules** - Avro namespaces map to nested Rust modules
//! - **Pluggable codecs** - Binary Avro through apache-avro, or JSON
//! - **Self-contained output** - The runtime is copied into the generated tree
//!
//! ## Quick Start
//!
//! ```ignore
//! use avroforge::prelude::*;
//!
//! let files = compile_path(Path::new("schemas"), &LinkOptions::new())?;
//! emit_file_map(&files, Path::new("src/generated"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime traits, datum model and drivers
//! - [`schema`] - Schema parsing and namespace analysis
//! - [`codegen`] - Compilation, linking and emission

pub mod prelude;

/// Runtime traits, datum model and codec drivers.
pub mod core {
    pub use avroforge_core::*;
}

/// Schema parsing and analysis.
pub mod schema {
    pub use avroforge_schema::*;
}

/// Code generation from Avro schemas.
pub mod codegen {
    pub use avroforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use avroforge_codegen::{
    CodegenError, FileMap, LinkOptions, compile_path, compile_schemas, emit_file_map,
};
pub use avroforge_core::{AvroObject, CoreError, Datum, DriverProxy, DriverRegistry};
pub use avroforge_schema::{Schema, parse_schema};

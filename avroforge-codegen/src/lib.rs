//! # avroforge Codegen
//!
//! Rust code generation from Avro schemas.
//!
//! This crate provides:
//! - Type signatures for every schema variant
//! - Record, builder, enum and fixed type generation
//! - Import resolution across namespaces
//! - Linking into a module tree with a vendored runtime
//! - Emission of the tree to disk

pub mod compiler;
pub mod emit;
pub mod error;
pub mod ident;
pub mod imports;
pub mod linker;
pub mod rust;
pub mod signature;

pub use compiler::{CompiledNamespaceMap, Declaration, compile_namespace_map, compile_schema};
pub use emit::{emit_file_map, prepare_target};
pub use error::CodegenError;
pub use imports::{ImportSource, RequiredImports, required_imports};
pub use linker::{FileMap, LinkOptions, link_module};
pub use signature::{TypeSignature, compile_type_signature};

use avroforge_schema::{Schema, parse_namespaces};
use std::path::Path;

/// Generates a module tree from parsed schemas.
///
/// # Arguments
/// * `schemas` - Root schemas in input order
/// * `options` - Link options
///
/// # Returns
/// Relative path → Rust source for the whole tree.
///
/// # Errors
/// Returns `CodegenError` if partitioning or compilation fails.
pub fn compile_schemas(schemas: &[Schema], options: &LinkOptions) -> Result<FileMap, CodegenError> {
    let map = parse_namespaces(schemas)?;
    let compiled = compile_namespace_map(&map)?;
    Ok(link_module(&compiled, options))
}

/// Generates a module tree from a schema file or directory.
///
/// # Arguments
/// * `source` - A `*.avsc` file or a directory of them
/// * `options` - Link options
///
/// # Returns
/// Relative path → Rust source for the whole tree.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing or compilation fails.
pub fn compile_path(source: &Path, options: &LinkOptions) -> Result<FileMap, CodegenError> {
    let schemas = avroforge_schema::read_path(source)?;
    tracing::info!("parsed {} schemas from {}", schemas.len(), source.display());
    compile_schemas(&schemas, options)
}

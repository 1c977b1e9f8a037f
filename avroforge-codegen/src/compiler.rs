//! Schema compiler.
//!
//! Turns named schema nodes into Rust declarations and compiles a whole
//! namespace map into per-namespace cells ready for linking.

use crate::error::CodegenError;
use crate::ident::type_ident;
use crate::imports::type_dependencies;
use crate::rust::{BuilderGenerator, EnumGenerator, FixedGenerator, RecordGenerator};
use avroforge_schema::{AvroSchema, NamespaceMap, SchemaKind};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Generated source of one named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Rust identifier of the declared type.
    pub name: String,
    /// Fully qualified Avro name.
    pub fullname: String,
    /// Rust source of the type and its companions.
    pub source: String,
}

/// A schema node paired with its declaration, if it has one.
pub type NamespaceCell<'a> = (AvroSchema<'a>, Option<Declaration>);

/// Namespace → compiled cells.
pub type CompiledNamespaceMap<'a> = BTreeMap<String, Vec<NamespaceCell<'a>>>;

/// Compiles a named schema into a declaration.
///
/// # Arguments
/// * `schema` - Record, enum, fixed or fixed decimal node
///
/// # Returns
/// The declaration of the type. Records include their builder.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for any other variant or for a
/// record with an unsupported field type.
pub fn compile_schema(schema: &AvroSchema<'_>) -> Result<Declaration, CodegenError> {
    let (name, source) = match schema.kind() {
        SchemaKind::Record(_) => {
            let record = RecordGenerator::new(*schema)?;
            let mut source = record.generate();
            source.push_str(&BuilderGenerator::new(&record).generate());
            (record.type_name().to_string(), source)
        }
        SchemaKind::Enum(_) => {
            let generator = EnumGenerator::new(*schema)?;
            (type_ident(schema.name().unwrap_or_default()), generator.generate())
        }
        SchemaKind::Fixed(_) | SchemaKind::FixedDecimal(_) => {
            let generator = FixedGenerator::new(*schema)?;
            (type_ident(schema.name().unwrap_or_default()), generator.generate())
        }
        _ => {
            return Err(CodegenError::unsupported(
                schema.type_name(),
                "only named types have declarations",
            ));
        }
    };
    let fullname = schema.fullname().unwrap_or_else(|| name.clone());
    tracing::trace!("compiled '{}'", fullname);
    Ok(Declaration {
        name,
        fullname,
        source: source.trim_end().to_string(),
    })
}

/// Compiles every node of a namespace map.
///
/// Unnamed nodes get no declaration. A named node whose compilation fails
/// with `UnsupportedType` also gets none and is logged, and so does every
/// named node that refers to it. Named duplicates are collapsed by fullname:
/// the last occurrence wins.
///
/// # Errors
/// Propagates every error other than `CodegenError::UnsupportedType`.
pub fn compile_namespace_map<'a>(
    map: &NamespaceMap<'a>,
) -> Result<CompiledNamespaceMap<'a>, CodegenError> {
    let mut compiled = CompiledNamespaceMap::new();
    for (namespace, schemas) in map {
        let mut cells: Vec<NamespaceCell<'a>> = Vec::with_capacity(schemas.len());
        let mut last: HashMap<String, usize> = HashMap::new();

        for schema in schemas {
            let Some(fullname) = schema.fullname() else {
                cells.push((*schema, None));
                continue;
            };
            if last.insert(fullname.clone(), cells.len()).is_some() {
                tracing::debug!("duplicate named type '{}', keeping the last definition", fullname);
            }
            let declaration = match compile_schema(schema) {
                Ok(declaration) => Some(declaration),
                Err(CodegenError::UnsupportedType { kind, detail }) => {
                    tracing::warn!("skipping '{}': unsupported type '{}': {}", fullname, kind, detail);
                    None
                }
                Err(err) => return Err(err),
            };
            cells.push((*schema, declaration));
        }

        let cells = cells
            .into_iter()
            .enumerate()
            .filter(|(index, (schema, _))| {
                schema
                    .fullname()
                    .is_none_or(|fullname| last.get(&fullname) == Some(index))
            })
            .map(|(_, cell)| cell)
            .collect();
        compiled.insert(namespace.clone(), cells);
    }
    drop_dependents(&mut compiled);
    tracing::debug!("compiled {} namespaces", compiled.len());
    Ok(compiled)
}

/// Withdraws declarations that refer to a named type left undeclared.
///
/// Runs to a fixed point across namespaces. Unnamed cells pointing at an
/// undeclared type are removed so that no unit imports it.
fn drop_dependents(compiled: &mut CompiledNamespaceMap<'_>) {
    let mut undeclared: HashSet<String> = compiled
        .values()
        .flatten()
        .filter(|(_, declaration)| declaration.is_none())
        .filter_map(|(schema, _)| schema.fullname())
        .collect();
    if undeclared.is_empty() {
        return;
    }

    let mut changed = true;
    while changed {
        changed = false;
        for (schema, declaration) in compiled.values_mut().flatten() {
            if declaration.is_none() {
                continue;
            }
            let dependencies = type_dependencies(schema);
            let Some(missing) = dependencies.iter().find(|name| undeclared.contains(*name)) else {
                continue;
            };
            let fullname = schema.fullname().unwrap_or_default();
            tracing::warn!("skipping '{}': refers to undeclared type '{}'", fullname, missing);
            *declaration = None;
            undeclared.insert(fullname);
            changed = true;
        }
    }

    for cells in compiled.values_mut() {
        cells.retain(|(schema, _)| {
            schema.is_named()
                || type_dependencies(schema)
                    .iter()
                    .all(|name| !undeclared.contains(name))
        });
    }
}

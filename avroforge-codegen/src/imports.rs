//! Import resolution.
//!
//! Works out which symbols the declaration of a schema node needs in scope:
//! runtime traits, third-party types and the generated types of other
//! namespaces.

use crate::ident::type_ident;
use crate::signature::{TypeSignature, non_null_branches, primitive_signature};
use avroforge_core::union::MAX_UNION_BRANCHES;
use avroforge_schema::{AvroSchema, DEFAULT_NAMESPACE, SchemaKind};
use std::collections::{BTreeMap, BTreeSet};

/// Symbols every named declaration needs from the runtime.
const OBJECT_CONTRACT: &[&str] = &["AvroObject", "CoreError", "Datum", "FromDatum", "ToDatum"];

/// Module a set of symbols is imported from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportSource {
    /// The runtime library mounted at the root of the generated tree.
    Runtime,
    /// An absolute crate path, such as `chrono` or `std::collections`.
    External(String),
    /// A generated namespace, by dotted Avro name.
    Namespace(String),
}

/// Import source → symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredImports(BTreeMap<ImportSource, BTreeSet<String>>);

impl RequiredImports {
    /// Creates an empty set of imports.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds symbols under a source.
    pub fn insert<I, S>(&mut self, source: ImportSource, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(source)
            .or_default()
            .extend(symbols.into_iter().map(Into::into));
    }

    /// Merges another set into this one, key by key.
    pub fn merge(&mut self, other: RequiredImports) {
        for (source, symbols) in other.0 {
            self.0.entry(source).or_default().extend(symbols);
        }
    }

    /// Returns the merge of both sets.
    #[must_use]
    pub fn union(mut self, other: RequiredImports) -> Self {
        self.merge(other);
        self
    }

    /// Symbols required from a source, if any.
    #[must_use]
    pub fn get(&self, source: &ImportSource) -> Option<&BTreeSet<String>> {
        self.0.get(source)
    }

    /// Returns `true` when nothing is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates sources in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ImportSource, &BTreeSet<String>)> {
        self.0.iter()
    }
}

/// Computes the imports the declaration of `schema` needs.
///
/// # Arguments
/// * `schema` - Any node of a namespace map
/// * `ambient` - Namespace key the node was bucketed under
///
/// # Returns
/// The node's own requirement, the generated types it reaches in other
/// namespaces, and the runtime object contract when the node is named.
#[must_use]
pub fn required_imports(schema: &AvroSchema<'_>, ambient: &str) -> RequiredImports {
    let mut imports = base_imports(schema);

    let current = if schema.is_named() {
        schema.namespace().unwrap_or(DEFAULT_NAMESPACE)
    } else {
        ambient
    };
    if !schema.is_named() {
        add_foreign(schema, current, &mut imports);
    }
    for child in schema.contained_schemas() {
        collect_foreign(&child, current, &mut imports);
    }

    if schema.is_named() {
        imports.insert(ImportSource::Runtime, OBJECT_CONTRACT.iter().copied());
    }
    imports
}

fn base_imports(schema: &AvroSchema<'_>) -> RequiredImports {
    let mut imports = RequiredImports::new();
    match schema.kind() {
        SchemaKind::Primitive(primitive) => {
            match primitive_signature(&primitive.type_name, primitive.logical_type.as_deref()) {
                Some(TypeSignature::Uuid) => {
                    imports.insert(ImportSource::External("uuid".into()), ["Uuid"]);
                }
                Some(TypeSignature::Date) => {
                    imports.insert(ImportSource::External("chrono".into()), ["NaiveDate"]);
                }
                Some(TypeSignature::Time) => {
                    imports.insert(ImportSource::External("chrono".into()), ["NaiveTime"]);
                }
                Some(TypeSignature::Timestamp) => {
                    imports.insert(ImportSource::External("chrono".into()), ["DateTime", "Utc"]);
                }
                Some(TypeSignature::Bytes) => {
                    imports.insert(ImportSource::External("bytes".into()), ["Bytes"]);
                }
                _ => {}
            }
        }
        SchemaKind::Map(_) => {
            imports.insert(
                ImportSource::External("std::collections".into()),
                ["HashMap"],
            );
        }
        SchemaKind::Union(_) => {
            let count = non_null_branches(schema);
            if (2..=MAX_UNION_BRANCHES).contains(&count) {
                imports.insert(ImportSource::Runtime, [format!("Union{}", count)]);
            }
        }
        SchemaKind::Record(_) => {
            imports.insert(
                ImportSource::Runtime,
                ["AvroRecord", "RecordBuilder", "RecordDatum"],
            );
        }
        SchemaKind::Enum(_) => {
            imports.insert(ImportSource::Runtime, ["AvroEnum"]);
        }
        SchemaKind::Fixed(_) => {
            imports.insert(ImportSource::Runtime, ["AvroFixed", "FixedBytes"]);
        }
        SchemaKind::FixedDecimal(_) => {
            imports.insert(
                ImportSource::Runtime,
                ["AvroFixed", "AvroFixedDecimal", "FixedBytes"],
            );
        }
        SchemaKind::Field(_) | SchemaKind::Array(_) | SchemaKind::Reference(_) => {}
    }
    imports
}

/// Fully qualified names of the named types a node's declaration refers to.
///
/// A reference counts as its target. Named children are collected without
/// descending into them; unnamed containers are walked through.
#[must_use]
pub fn type_dependencies(schema: &AvroSchema<'_>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    if let Some(reference) = schema.reference() {
        names.insert(reference.name.fullname());
        return names;
    }
    for child in schema.contained_schemas() {
        collect_dependencies(&child, &mut names);
    }
    names
}

fn collect_dependencies(schema: &AvroSchema<'_>, names: &mut BTreeSet<String>) {
    if let Some(reference) = schema.reference() {
        names.insert(reference.name.fullname());
    } else if let Some(fullname) = schema.fullname() {
        names.insert(fullname);
    } else {
        for child in schema.contained_schemas() {
            collect_dependencies(&child, names);
        }
    }
}

/// Walks unnamed containers down to the named nodes and references they hold.
fn collect_foreign(schema: &AvroSchema<'_>, current: &str, imports: &mut RequiredImports) {
    if add_foreign(schema, current, imports) || schema.is_named() {
        return;
    }
    for child in schema.contained_schemas() {
        collect_foreign(&child, current, imports);
    }
}

/// Records `schema` when it is a named node or reference outside `current`.
fn add_foreign(schema: &AvroSchema<'_>, current: &str, imports: &mut RequiredImports) -> bool {
    let target = match schema.kind() {
        SchemaKind::Reference(reference) => Some((
            reference.name.namespace.as_deref(),
            reference.name.name.as_str(),
        )),
        _ => schema.name().map(|name| (schema.namespace(), name)),
    };
    let Some((namespace, name)) = target else {
        return false;
    };
    let namespace = namespace.unwrap_or(DEFAULT_NAMESPACE);
    if namespace != current {
        imports.insert(ImportSource::Namespace(namespace.to_string()), [type_ident(name)]);
    }
    true
}

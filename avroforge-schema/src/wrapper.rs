//! Uniform handle over schema and field nodes.
//!
//! [`AvroSchema`] borrows either a [`Schema`] or a [`Field`] and exposes one
//! accessor interface for both. Every accessor returning child nodes returns
//! them wrapped, so a traversal never sees raw nodes. Accessors that do not
//! apply to the underlying variant return `None` instead of failing.

use crate::canonical::canonical_name;
use crate::types::{
    ArraySchema, EnumSchema, Field, FixedDecimalSchema, FixedSchema, MapSchema, Name,
    PrimitiveSchema, RecordSchema, ReferenceSchema, Schema, UnionSchema,
};
use serde_json::Value;

/// Borrowed handle over a schema or field node.
#[derive(Debug, Clone, Copy)]
pub enum AvroSchema<'a> {
    /// A schema node.
    Schema(&'a Schema),
    /// A record field.
    Field(&'a Field),
}

/// Per-variant view of a wrapped node.
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
    /// Primitive, optionally logical.
    Primitive(&'a PrimitiveSchema),
    /// Record.
    Record(&'a RecordSchema),
    /// Record field.
    Field(&'a Field),
    /// Array.
    Array(&'a ArraySchema),
    /// Map.
    Map(&'a MapSchema),
    /// Union.
    Union(&'a UnionSchema),
    /// Enum.
    Enum(&'a EnumSchema),
    /// Fixed.
    Fixed(&'a FixedSchema),
    /// Fixed decimal.
    FixedDecimal(&'a FixedDecimalSchema),
    /// By-name reference.
    Reference(&'a ReferenceSchema),
}

impl<'a> From<&'a Schema> for AvroSchema<'a> {
    fn from(schema: &'a Schema) -> Self {
        Self::Schema(schema)
    }
}

impl<'a> From<&'a Field> for AvroSchema<'a> {
    fn from(field: &'a Field) -> Self {
        Self::Field(field)
    }
}

impl<'a> From<&AvroSchema<'a>> for AvroSchema<'a> {
    fn from(schema: &AvroSchema<'a>) -> Self {
        *schema
    }
}

impl<'a> AvroSchema<'a> {
    /// Wraps a schema, a field, or an existing handle.
    ///
    /// Wrapping a handle returns a handle to the same node.
    #[must_use]
    pub fn wrap(value: impl Into<AvroSchema<'a>>) -> Self {
        value.into()
    }

    /// Returns `true` if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &AvroSchema<'_>) -> bool {
        match (self, other) {
            (Self::Schema(a), AvroSchema::Schema(b)) => std::ptr::eq(*a, *b),
            (Self::Field(a), AvroSchema::Field(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// Returns the underlying schema node, if this is not a field.
    #[must_use]
    pub fn as_schema(&self) -> Option<&'a Schema> {
        match self {
            Self::Schema(schema) => Some(schema),
            Self::Field(_) => None,
        }
    }

    /// Returns the underlying field, if this is a field.
    #[must_use]
    pub fn as_field(&self) -> Option<&'a Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Schema(_) => None,
        }
    }

    /// Returns the per-variant view of the node.
    #[must_use]
    pub fn kind(&self) -> SchemaKind<'a> {
        match self {
            Self::Field(field) => SchemaKind::Field(field),
            Self::Schema(schema) => match schema {
                Schema::Primitive(primitive) => SchemaKind::Primitive(primitive),
                Schema::Record(record) => SchemaKind::Record(record),
                Schema::Array(array) => SchemaKind::Array(array),
                Schema::Map(map) => SchemaKind::Map(map),
                Schema::Union(union) => SchemaKind::Union(union),
                Schema::Enum(enum_schema) => SchemaKind::Enum(enum_schema),
                Schema::Fixed(fixed) => SchemaKind::Fixed(fixed),
                Schema::FixedDecimal(decimal) => SchemaKind::FixedDecimal(decimal),
                Schema::Reference(reference) => SchemaKind::Reference(reference),
            },
        }
    }

    fn qualified_name(&self) -> Option<&'a Name> {
        self.as_schema().and_then(Schema::name)
    }

    /// Simple name of a named type; `None` for every other variant.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.qualified_name().map(|name| name.name.as_str())
    }

    /// Namespace of a named type; `None` when unnamed or in the default namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&'a str> {
        self.qualified_name()
            .and_then(|name| name.namespace.as_deref())
    }

    /// Fully qualified name of a named type.
    #[must_use]
    pub fn fullname(&self) -> Option<String> {
        self.qualified_name().map(canonical_name)
    }

    /// Dot-split namespace; empty when absent.
    #[must_use]
    pub fn namespace_components(&self) -> Vec<&'a str> {
        self.namespace()
            .map(|namespace| namespace.split('.').collect())
            .unwrap_or_default()
    }

    /// Dot-split fullname; empty when absent.
    #[must_use]
    pub fn fullname_components(&self) -> Vec<String> {
        self.fullname()
            .map(|fullname| fullname.split('.').map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `true` for records, enums, fixed and fixed decimal types.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.qualified_name().is_some()
    }

    /// `true` for variants that can contain other schema nodes.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(
            self.kind(),
            SchemaKind::Record(_)
                | SchemaKind::Field(_)
                | SchemaKind::Array(_)
                | SchemaKind::Map(_)
                | SchemaKind::Union(_)
        )
    }

    /// Immediate children for containment purposes, wrapped.
    #[must_use]
    pub fn contained_schemas(&self) -> Vec<AvroSchema<'a>> {
        match self.kind() {
            SchemaKind::Record(record) => record
                .fields
                .iter()
                .map(|field| AvroSchema::Schema(&field.schema))
                .collect(),
            SchemaKind::Field(field) => vec![AvroSchema::Schema(&field.schema)],
            SchemaKind::Array(array) => vec![AvroSchema::Schema(&array.items)],
            SchemaKind::Map(map) => vec![AvroSchema::Schema(&map.values)],
            SchemaKind::Union(union) => union.schemas.iter().map(AvroSchema::Schema).collect(),
            _ => Vec::new(),
        }
    }

    /// Record fields, wrapped.
    #[must_use]
    pub fn fields(&self) -> Option<Vec<AvroSchema<'a>>> {
        match self.kind() {
            SchemaKind::Record(record) => {
                Some(record.fields.iter().map(AvroSchema::Field).collect())
            }
            _ => None,
        }
    }

    /// Union alternatives, wrapped.
    #[must_use]
    pub fn schemas(&self) -> Option<Vec<AvroSchema<'a>>> {
        match self.kind() {
            SchemaKind::Union(union) => Some(union.schemas.iter().map(AvroSchema::Schema).collect()),
            _ => None,
        }
    }

    /// Array item type.
    #[must_use]
    pub fn items(&self) -> Option<AvroSchema<'a>> {
        match self.kind() {
            SchemaKind::Array(array) => Some(AvroSchema::Schema(&array.items)),
            _ => None,
        }
    }

    /// Map value type.
    #[must_use]
    pub fn values(&self) -> Option<AvroSchema<'a>> {
        match self.kind() {
            SchemaKind::Map(map) => Some(AvroSchema::Schema(&map.values)),
            _ => None,
        }
    }

    /// Declared type of a field.
    #[must_use]
    pub fn field_type(&self) -> Option<AvroSchema<'a>> {
        self.as_field().map(|field| AvroSchema::Schema(&field.schema))
    }

    /// Field name of a field handle.
    #[must_use]
    pub fn field_name(&self) -> Option<&'a str> {
        self.as_field().map(|field| field.name.as_str())
    }

    /// Enum symbols.
    #[must_use]
    pub fn symbols(&self) -> Option<&'a [String]> {
        match self.kind() {
            SchemaKind::Enum(enum_schema) => Some(enum_schema.symbols.as_slice()),
            _ => None,
        }
    }

    /// Fixed size in bytes.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self.kind() {
            SchemaKind::Fixed(fixed) => Some(fixed.size),
            SchemaKind::FixedDecimal(decimal) => Some(decimal.size),
            _ => None,
        }
    }

    /// Decimal precision.
    #[must_use]
    pub fn precision(&self) -> Option<u32> {
        match self.kind() {
            SchemaKind::FixedDecimal(decimal) => Some(decimal.precision),
            _ => None,
        }
    }

    /// Decimal scale.
    #[must_use]
    pub fn scale(&self) -> Option<u32> {
        match self.kind() {
            SchemaKind::FixedDecimal(decimal) => Some(decimal.scale),
            _ => None,
        }
    }

    /// Logical type annotation.
    #[must_use]
    pub fn logical_type(&self) -> Option<&'a str> {
        match self.kind() {
            SchemaKind::Primitive(primitive) => primitive.logical_type.as_deref(),
            SchemaKind::Fixed(fixed) => fixed.logical_type.as_deref(),
            SchemaKind::FixedDecimal(_) => Some("decimal"),
            _ => None,
        }
    }

    /// Target of a by-name reference.
    #[must_use]
    pub fn reference(&self) -> Option<&'a ReferenceSchema> {
        match self.kind() {
            SchemaKind::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Avro type tag; a field reports the tag of its type.
    #[must_use]
    pub fn type_name(&self) -> &'a str {
        match self {
            Self::Schema(schema) => schema.type_name(),
            Self::Field(field) => field.schema.type_name(),
        }
    }

    /// Documentation string.
    #[must_use]
    pub fn doc(&self) -> Option<&'a str> {
        match self.kind() {
            SchemaKind::Record(record) => record.doc.as_deref(),
            SchemaKind::Field(field) => field.doc.as_deref(),
            SchemaKind::Enum(enum_schema) => enum_schema.doc.as_deref(),
            SchemaKind::Fixed(fixed) => fixed.doc.as_deref(),
            SchemaKind::FixedDecimal(decimal) => decimal.doc.as_deref(),
            _ => None,
        }
    }

    /// Declared default value of a field.
    #[must_use]
    pub fn default_value(&self) -> Option<&'a Value> {
        self.as_field().and_then(|field| field.default.as_ref())
    }

    /// Canonical JSON form.
    #[must_use]
    pub fn to_canonical_json(&self) -> String {
        match self {
            Self::Schema(schema) => schema.canonical_form(),
            Self::Field(field) => field.canonical_form(),
        }
    }

    /// Raw JSON form.
    #[must_use]
    pub fn to_json(&self) -> String {
        match self {
            Self::Schema(schema) => schema.to_json(),
            Self::Field(field) => field.to_json(),
        }
    }
}

impl PartialEq for AvroSchema<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Schema(a), Self::Schema(b)) => a == b,
            (Self::Field(a), Self::Field(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<Schema> for AvroSchema<'_> {
    fn eq(&self, other: &Schema) -> bool {
        self.as_schema().is_some_and(|schema| schema == other)
    }
}

impl PartialEq<Field> for AvroSchema<'_> {
    fn eq(&self, other: &Field) -> bool {
        self.as_field().is_some_and(|field| field == other)
    }
}

impl<'a> IntoIterator for AvroSchema<'a> {
    type Item = AvroSchema<'a>;
    type IntoIter = std::vec::IntoIter<AvroSchema<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contained_schemas().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;
    use crate::types::PrimitiveType;

    fn user() -> Schema {
        parse_schema(
            r#"{
                "namespace": "com.acme",
                "type": "record",
                "name": "User",
                "fields": [
                    {"name": "name", "type": "string"},
                    {"name": "favorite_number", "type": ["int", "null"]},
                    {"name": "favorite_color", "type": ["string", "null"]}
                ]
            }"#,
        )
        .expect("Failed to parse")
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let schema = user();
        let once = AvroSchema::wrap(&schema);
        let twice = AvroSchema::wrap(&once);
        assert!(once.ptr_eq(&twice));
        assert!(twice.ptr_eq(&AvroSchema::wrap(&schema)));
    }

    #[test]
    fn test_names() {
        let schema = user();
        let wrapped = AvroSchema::wrap(&schema);
        assert_eq!(wrapped.name(), Some("User"));
        assert_eq!(wrapped.namespace(), Some("com.acme"));
        assert_eq!(wrapped.fullname().as_deref(), Some("com.acme.User"));
        assert_eq!(wrapped.namespace_components(), vec!["com", "acme"]);
        assert_eq!(wrapped.fullname_components(), vec!["com", "acme", "User"]);
        assert!(wrapped.is_named());
        assert!(wrapped.is_container());
    }

    #[test]
    fn test_unnamed_accessors_are_absent() {
        let schema = Schema::array(Schema::primitive(PrimitiveType::Int));
        let wrapped = AvroSchema::wrap(&schema);
        assert_eq!(wrapped.name(), None);
        assert_eq!(wrapped.namespace(), None);
        assert_eq!(wrapped.fullname(), None);
        assert!(wrapped.namespace_components().is_empty());
        assert!(wrapped.fullname_components().is_empty());
        assert!(!wrapped.is_named());
    }

    #[test]
    fn test_children_are_wrapped() {
        let schema = user();
        let wrapped = AvroSchema::wrap(&schema);
        let fields = wrapped.fields().expect("record has fields");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].field_name(), Some("name"));
        assert!(fields[1].is_container());
        let union = fields[1].field_type().expect("field has a type");
        let alternatives = union.schemas().expect("union has alternatives");
        assert_eq!(alternatives[0].type_name(), "int");
        assert_eq!(alternatives[1].type_name(), "null");
    }

    #[test]
    fn test_iteration_yields_contained_schemas() {
        let schema = user();
        let type_names: Vec<&str> = AvroSchema::wrap(&schema)
            .into_iter()
            .map(|child| child.type_name())
            .collect();
        assert_eq!(type_names, vec!["string", "union", "union"]);
        let leaf = Schema::primitive(PrimitiveType::Int);
        assert_eq!(AvroSchema::wrap(&leaf).into_iter().count(), 0);
    }

    #[test]
    fn test_equality() {
        let schema = user();
        let copy = user();
        let wrapped = AvroSchema::wrap(&schema);
        assert_eq!(wrapped, AvroSchema::wrap(&copy));
        assert_eq!(wrapped, copy);
        let Schema::Record(record) = &schema else {
            panic!("expected record");
        };
        let field = AvroSchema::wrap(&record.fields[0]);
        assert_eq!(field, record.fields[0]);
        assert_ne!(field, wrapped);
        assert!(wrapped != record.fields[0]);
    }

    #[test]
    fn test_fullname_of_dotted_name() {
        let schema = parse_schema(
            r#"{"type": "enum", "name": "org.acme.Suit", "namespace": "com.acme", "symbols": ["A"]}"#,
        )
        .expect("Failed to parse");
        let wrapped = AvroSchema::wrap(&schema);
        assert_eq!(wrapped.fullname().as_deref(), Some("org.acme.Suit"));
        assert_eq!(wrapped.namespace(), Some("org.acme"));
    }
}

//! Schema type definitions.
//!
//! This module contains the data structures representing Avro schema nodes:
//! primitives (with optional logical types), records and their fields, arrays,
//! maps, unions, enums, fixed types and by-name references.

use serde_json::{Map, Value};

/// Maximum nesting depth accepted by the parser and every traversal.
///
/// Kept below the JSON reader's own recursion limit of 128 so that deep
/// schema text fails with a depth error rather than a JSON error.
pub const MAX_SCHEMA_DEPTH: usize = 64;

/// Avro primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    /// No value.
    Null,
    /// Binary value.
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Single precision IEEE 754 float.
    Float,
    /// Double precision IEEE 754 float.
    Double,
    /// Sequence of 8-bit unsigned bytes.
    Bytes,
    /// Unicode character sequence.
    String,
}

impl PrimitiveType {
    /// All primitive types in declaration order.
    pub const ALL: [PrimitiveType; 8] = [
        Self::Null,
        Self::Boolean,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Bytes,
        Self::String,
    ];

    /// Parses a primitive type from its Avro name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|primitive| primitive.as_str() == name)
    }

    /// Returns the Avro name of the primitive type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::String => "string",
        }
    }
}

/// A qualified Avro name.
///
/// Dotted names are split on construction, so `name` is always the simple
/// name and `namespace` the effective namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    /// Simple (unqualified) name.
    pub name: String,
    /// Effective namespace, `None` for the default namespace.
    pub namespace: Option<String>,
}

impl Name {
    /// Creates a name, applying Avro qualification rules.
    ///
    /// A name that already contains a dot is fully qualified and ignores
    /// `namespace`. An empty namespace denotes the default namespace.
    #[must_use]
    pub fn new(name: &str, namespace: Option<&str>) -> Self {
        match name.rsplit_once('.') {
            Some((qualifier, simple)) => Self {
                name: simple.to_string(),
                namespace: non_empty(qualifier),
            },
            None => Self {
                name: name.to_string(),
                namespace: namespace.and_then(non_empty),
            },
        }
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fullname())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Kind of named type a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKind {
    /// Record (or error) type.
    Record,
    /// Enum type.
    Enum,
    /// Fixed type, including fixed decimals.
    Fixed,
}

impl NamedKind {
    /// Returns the Avro type tag of the named kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Enum => "enum",
            Self::Fixed => "fixed",
        }
    }
}

/// Primitive schema with an optional logical type.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSchema {
    /// Avro type name (`int`, `string`, ...).
    pub type_name: String,
    /// Logical type annotation.
    pub logical_type: Option<String>,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl PrimitiveSchema {
    /// Creates a primitive schema without a logical type.
    #[must_use]
    pub fn new(primitive: PrimitiveType) -> Self {
        Self::named(primitive.as_str())
    }

    /// Creates a primitive schema from an arbitrary type name.
    #[must_use]
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            logical_type: None,
            properties: Map::new(),
        }
    }

    /// Sets the logical type.
    #[must_use]
    pub fn with_logical_type(mut self, logical_type: impl Into<String>) -> Self {
        self.logical_type = Some(logical_type.into());
        self
    }

    /// Returns the parsed primitive type, if the name is a known primitive.
    #[must_use]
    pub fn primitive(&self) -> Option<PrimitiveType> {
        PrimitiveType::parse(&self.type_name)
    }
}

/// Record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub schema: Schema,
    /// Documentation.
    pub doc: Option<String>,
    /// Default value as declared.
    pub default: Option<Value>,
    /// Sort order (`ascending`, `descending`, `ignore`).
    pub order: Option<String>,
    /// Alternate names.
    pub aliases: Vec<String>,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            doc: None,
            default: None,
            order: None,
            aliases: Vec::new(),
            properties: Map::new(),
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Qualified name.
    pub name: Name,
    /// Documentation.
    pub doc: Option<String>,
    /// Alternate names.
    pub aliases: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Declared with type `error`.
    pub is_error: bool,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl RecordSchema {
    /// Creates a record schema.
    #[must_use]
    pub fn new(name: Name, fields: Vec<Field>) -> Self {
        Self {
            name,
            doc: None,
            aliases: Vec::new(),
            fields,
            is_error: false,
            properties: Map::new(),
        }
    }
}

/// Array schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    /// Item type.
    pub items: Box<Schema>,
}

/// Map schema with string keys.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSchema {
    /// Value type.
    pub values: Box<Schema>,
}

/// Union schema.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    /// Alternatives in declaration order.
    pub schemas: Vec<Schema>,
}

/// Enum schema.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    /// Qualified name.
    pub name: Name,
    /// Documentation.
    pub doc: Option<String>,
    /// Alternate names.
    pub aliases: Vec<String>,
    /// Symbols in declaration order.
    pub symbols: Vec<String>,
    /// Default symbol.
    pub default: Option<String>,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl EnumSchema {
    /// Creates an enum schema.
    #[must_use]
    pub fn new(name: Name, symbols: Vec<String>) -> Self {
        Self {
            name,
            doc: None,
            aliases: Vec::new(),
            symbols,
            default: None,
            properties: Map::new(),
        }
    }
}

/// Fixed-size byte schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSchema {
    /// Qualified name.
    pub name: Name,
    /// Documentation.
    pub doc: Option<String>,
    /// Alternate names.
    pub aliases: Vec<String>,
    /// Size in bytes.
    pub size: usize,
    /// Logical type other than `decimal` (for example `duration`).
    pub logical_type: Option<String>,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl FixedSchema {
    /// Creates a fixed schema.
    #[must_use]
    pub fn new(name: Name, size: usize) -> Self {
        Self {
            name,
            doc: None,
            aliases: Vec::new(),
            size,
            logical_type: None,
            properties: Map::new(),
        }
    }
}

/// Fixed-size decimal schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDecimalSchema {
    /// Qualified name.
    pub name: Name,
    /// Documentation.
    pub doc: Option<String>,
    /// Alternate names.
    pub aliases: Vec<String>,
    /// Size in bytes.
    pub size: usize,
    /// Number of significant digits.
    pub precision: u32,
    /// Number of digits after the decimal point.
    pub scale: u32,
    /// Additional attributes kept for the raw schema form.
    pub properties: Map<String, Value>,
}

impl FixedDecimalSchema {
    /// Creates a fixed decimal schema.
    #[must_use]
    pub fn new(name: Name, size: usize, precision: u32, scale: u32) -> Self {
        Self {
            name,
            doc: None,
            aliases: Vec::new(),
            size,
            precision,
            scale,
            properties: Map::new(),
        }
    }
}

/// Occurrence of a named type declared earlier in the same document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSchema {
    /// Qualified name of the referenced type.
    pub name: Name,
    /// Kind of the referenced type.
    pub kind: NamedKind,
}

/// Avro schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Primitive, optionally with a logical type.
    Primitive(PrimitiveSchema),
    /// Record.
    Record(RecordSchema),
    /// Array.
    Array(ArraySchema),
    /// Map.
    Map(MapSchema),
    /// Union.
    Union(UnionSchema),
    /// Enum.
    Enum(EnumSchema),
    /// Fixed.
    Fixed(FixedSchema),
    /// Fixed with a decimal logical type.
    FixedDecimal(FixedDecimalSchema),
    /// By-name reference.
    Reference(ReferenceSchema),
}

impl Schema {
    /// Creates a primitive schema.
    #[must_use]
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Self::Primitive(PrimitiveSchema::new(primitive))
    }

    /// Creates a primitive schema carrying a logical type.
    #[must_use]
    pub fn logical(primitive: PrimitiveType, logical_type: &str) -> Self {
        Self::Primitive(PrimitiveSchema::new(primitive).with_logical_type(logical_type))
    }

    /// Creates an array schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self::Array(ArraySchema {
            items: Box::new(items),
        })
    }

    /// Creates a map schema.
    #[must_use]
    pub fn map(values: Schema) -> Self {
        Self::Map(MapSchema {
            values: Box::new(values),
        })
    }

    /// Creates a union schema.
    #[must_use]
    pub fn union(schemas: Vec<Schema>) -> Self {
        Self::Union(UnionSchema { schemas })
    }

    /// Returns the Avro type tag of this node.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Primitive(primitive) => &primitive.type_name,
            Self::Record(record) if record.is_error => "error",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::Fixed(_) | Self::FixedDecimal(_) => "fixed",
            Self::Reference(reference) => reference.kind.type_name(),
        }
    }

    /// Returns the qualified name of a declared named type.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        match self {
            Self::Record(record) => Some(&record.name),
            Self::Enum(enum_schema) => Some(&enum_schema.name),
            Self::Fixed(fixed) => Some(&fixed.name),
            Self::FixedDecimal(decimal) => Some(&decimal.name),
            _ => None,
        }
    }

    /// Returns the kind of a declared named type.
    #[must_use]
    pub fn named_kind(&self) -> Option<NamedKind> {
        match self {
            Self::Record(_) => Some(NamedKind::Record),
            Self::Enum(_) => Some(NamedKind::Enum),
            Self::Fixed(_) | Self::FixedDecimal(_) => Some(NamedKind::Fixed),
            _ => None,
        }
    }
}

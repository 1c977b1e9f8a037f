//! Type-signature compiler.
//!
//! Maps every schema node to the Rust type a generated field of that schema
//! holds. Named types are referred to by name only; their bodies are
//! synthesized by the schema compiler.

use crate::error::CodegenError;
use crate::ident::type_ident;
use avroforge_core::union::MAX_UNION_BRANCHES;
use avroforge_schema::{AvroSchema, MAX_SCHEMA_DEPTH, PrimitiveType, SchemaKind};
use std::fmt;

/// Rust type of a schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignature {
    /// `()`.
    Unit,
    /// `bool`.
    Boolean,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// `Bytes`.
    Bytes,
    /// `String`.
    String,
    /// `Uuid`.
    Uuid,
    /// `NaiveDate`.
    Date,
    /// `NaiveTime`.
    Time,
    /// `DateTime<Utc>`.
    Timestamp,
    /// `Vec<T>`.
    Array(Box<TypeSignature>),
    /// `HashMap<String, T>`.
    Map(Box<TypeSignature>),
    /// `Option<T>`.
    Optional(Box<TypeSignature>),
    /// `UnionN<...>` over non-null branches.
    Union(Vec<TypeSignature>),
    /// Generated type declared inline.
    Named(String),
    /// Generated type reached through a by-name reference, boxed.
    Reference(String),
}

impl TypeSignature {
    /// Returns `true` for `Option<T>`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Boolean => f.write_str("bool"),
            Self::Int => f.write_str("i32"),
            Self::Long => f.write_str("i64"),
            Self::Float => f.write_str("f32"),
            Self::Double => f.write_str("f64"),
            Self::Bytes => f.write_str("Bytes"),
            Self::String => f.write_str("String"),
            Self::Uuid => f.write_str("Uuid"),
            Self::Date => f.write_str("NaiveDate"),
            Self::Time => f.write_str("NaiveTime"),
            Self::Timestamp => f.write_str("DateTime<Utc>"),
            Self::Array(items) => write!(f, "Vec<{}>", items),
            Self::Map(values) => write!(f, "HashMap<String, {}>", values),
            Self::Optional(inner) => write!(f, "Option<{}>", inner),
            Self::Union(branches) => {
                write!(f, "Union{}<", branches.len())?;
                for (index, branch) in branches.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", branch)?;
                }
                f.write_str(">")
            }
            Self::Named(name) => f.write_str(name),
            Self::Reference(name) => write!(f, "Box<{}>", name),
        }
    }
}

/// Maps a primitive type name and logical tag to a signature.
///
/// Unknown logical tags fall back to the primitive; unknown primitive names
/// return `None`.
#[must_use]
pub fn primitive_signature(type_name: &str, logical_type: Option<&str>) -> Option<TypeSignature> {
    let primitive = PrimitiveType::parse(type_name)?;
    let logical = match logical_type {
        Some("uuid") => Some(TypeSignature::Uuid),
        Some("date") => Some(TypeSignature::Date),
        Some("time-millis" | "time-micros") => Some(TypeSignature::Time),
        Some("timestamp-millis" | "timestamp-micros") => Some(TypeSignature::Timestamp),
        _ => None,
    };
    Some(logical.unwrap_or(match primitive {
        PrimitiveType::Null => TypeSignature::Unit,
        PrimitiveType::Boolean => TypeSignature::Boolean,
        PrimitiveType::Int => TypeSignature::Int,
        PrimitiveType::Long => TypeSignature::Long,
        PrimitiveType::Float => TypeSignature::Float,
        PrimitiveType::Double => TypeSignature::Double,
        PrimitiveType::Bytes => TypeSignature::Bytes,
        PrimitiveType::String => TypeSignature::String,
    }))
}

/// Compiles the Rust type of a schema node.
///
/// # Arguments
/// * `schema` - Any schema or field node
///
/// # Returns
/// The signature; its `Display` is the Rust type expression.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for unknown primitives and unions
/// with too many branches, and `CodegenError::DepthExceeded` past
/// [`MAX_SCHEMA_DEPTH`].
pub fn compile_type_signature(schema: &AvroSchema<'_>) -> Result<TypeSignature, CodegenError> {
    compile_at_depth(schema, 0)
}

fn compile_at_depth(schema: &AvroSchema<'_>, depth: usize) -> Result<TypeSignature, CodegenError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(CodegenError::DepthExceeded {
            limit: MAX_SCHEMA_DEPTH,
        });
    }
    match schema.kind() {
        SchemaKind::Primitive(primitive) => {
            primitive_signature(&primitive.type_name, primitive.logical_type.as_deref())
                .ok_or_else(|| {
                    CodegenError::unsupported(&primitive.type_name, "unknown primitive type")
                })
        }
        SchemaKind::Field(_) => match schema.field_type() {
            Some(field_type) => compile_at_depth(&field_type, depth + 1),
            None => Err(CodegenError::generation("field without type")),
        },
        SchemaKind::Array(_) => match schema.items() {
            Some(items) => Ok(TypeSignature::Array(Box::new(compile_at_depth(
                &items,
                depth + 1,
            )?))),
            None => Err(CodegenError::generation("array without items")),
        },
        SchemaKind::Map(_) => match schema.values() {
            Some(values) => Ok(TypeSignature::Map(Box::new(compile_at_depth(
                &values,
                depth + 1,
            )?))),
            None => Err(CodegenError::generation("map without values")),
        },
        SchemaKind::Union(_) => compile_union(schema, depth),
        SchemaKind::Record(_) | SchemaKind::Enum(_) | SchemaKind::Fixed(_) | SchemaKind::FixedDecimal(_) => {
            let name = schema
                .name()
                .ok_or_else(|| CodegenError::generation("named type without name"))?;
            Ok(TypeSignature::Named(type_ident(name)))
        }
        SchemaKind::Reference(reference) => {
            Ok(TypeSignature::Reference(type_ident(&reference.name.name)))
        }
    }
}

fn compile_union(schema: &AvroSchema<'_>, depth: usize) -> Result<TypeSignature, CodegenError> {
    let mut branches = schema.schemas().unwrap_or_default();
    branches.sort_by_key(|branch| branch.type_name());
    let non_null: Vec<AvroSchema<'_>> = branches
        .iter()
        .copied()
        .filter(|branch| !is_null(branch))
        .collect();

    match non_null.len() {
        0 => Ok(TypeSignature::Unit),
        1 => Ok(TypeSignature::Optional(Box::new(compile_at_depth(
            &non_null[0],
            depth + 1,
        )?))),
        count if count > MAX_UNION_BRANCHES => Err(CodegenError::unsupported(
            "union",
            format!(
                "{} non-null branches, at most {} are supported",
                count, MAX_UNION_BRANCHES
            ),
        )),
        count => {
            let signatures = non_null
                .iter()
                .map(|branch| compile_at_depth(branch, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            let union = TypeSignature::Union(signatures);
            if count == branches.len() {
                Ok(union)
            } else {
                Ok(TypeSignature::Optional(Box::new(union)))
            }
        }
    }
}

/// Returns `true` for the `null` primitive.
#[must_use]
pub fn is_null(schema: &AvroSchema<'_>) -> bool {
    matches!(schema.kind(), SchemaKind::Primitive(primitive) if primitive.type_name == "null")
}

/// Number of non-null branches of a union node.
#[must_use]
pub fn non_null_branches(schema: &AvroSchema<'_>) -> usize {
    schema
        .schemas()
        .map(|branches| branches.iter().filter(|branch| !is_null(branch)).count())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avroforge_schema::{Schema, parse_schema};

    fn signature(json: &str) -> String {
        let schema = parse_schema(json).expect("Failed to parse");
        compile_type_signature(&AvroSchema::from(&schema))
            .expect("Failed to compile")
            .to_string()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(signature(r#""null""#), "()");
        assert_eq!(signature(r#""boolean""#), "bool");
        assert_eq!(signature(r#""int""#), "i32");
        assert_eq!(signature(r#""long""#), "i64");
        assert_eq!(signature(r#""float""#), "f32");
        assert_eq!(signature(r#""double""#), "f64");
        assert_eq!(signature(r#""bytes""#), "Bytes");
        assert_eq!(signature(r#""string""#), "String");
    }

    #[test]
    fn test_logical_types() {
        assert_eq!(signature(r#"{"type":"string","logicalType":"uuid"}"#), "Uuid");
        assert_eq!(signature(r#"{"type":"int","logicalType":"date"}"#), "NaiveDate");
        assert_eq!(signature(r#"{"type":"int","logicalType":"time-millis"}"#), "NaiveTime");
        assert_eq!(signature(r#"{"type":"long","logicalType":"time-micros"}"#), "NaiveTime");
        assert_eq!(
            signature(r#"{"type":"long","logicalType":"timestamp-millis"}"#),
            "DateTime<Utc>"
        );
        assert_eq!(signature(r#"{"type":"long","logicalType":"local-timestamp-millis"}"#), "i64");
    }

    #[test]
    fn test_containers() {
        assert_eq!(signature(r#"{"type":"array","items":"int"}"#), "Vec<i32>");
        assert_eq!(
            signature(r#"{"type":"map","values":{"type":"array","items":"string"}}"#),
            "HashMap<String, Vec<String>>"
        );
    }

    #[test]
    fn test_union_sorting() {
        assert_eq!(
            signature(r#"["string","boolean","null"]"#),
            "Option<Union2<bool, String>>"
        );
        assert_eq!(signature(r#"["long","int"]"#), "Union2<i32, i64>");
    }

    #[test]
    fn test_optional_collapsing() {
        assert_eq!(signature(r#"["int","null"]"#), "Option<i32>");
        assert_eq!(signature(r#"["null","string"]"#), "Option<String>");
        assert_eq!(signature(r#"["null"]"#), "()");
    }

    #[test]
    fn test_named_and_reference() {
        let json = r#"{"type":"record","name":"Node","namespace":"com.acme","fields":[
            {"name":"kind","type":{"type":"enum","name":"Kind","symbols":["A"]}},
            {"name":"next","type":["null","Node"]},
            {"name":"again","type":"Kind"}
        ]}"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let fields = AvroSchema::from(&schema).fields().expect("Failed to get fields");
        let rendered: Vec<String> = fields
            .iter()
            .map(|field| compile_type_signature(field).expect("Failed to compile").to_string())
            .collect();
        assert_eq!(rendered, vec!["Kind", "Option<Box<Node>>", "Box<Kind>"]);
        assert_eq!(signature(json), "Node");
    }

    #[test]
    fn test_unknown_primitive() {
        let schema = Schema::Primitive(avroforge_schema::PrimitiveSchema::named("int128"));
        assert!(matches!(
            compile_type_signature(&AvroSchema::from(&schema)),
            Err(CodegenError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_too_many_branches() {
        let json = r#"["null","int","long","float","double","bytes","string","boolean",
            {"type":"array","items":"int"},{"type":"map","values":"int"}]"#;
        let schema = parse_schema(json).expect("Failed to parse");
        assert!(matches!(
            compile_type_signature(&AvroSchema::from(&schema)),
            Err(CodegenError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut schema = Schema::primitive(PrimitiveType::Int);
        for _ in 0..=MAX_SCHEMA_DEPTH {
            schema = Schema::array(schema);
        }
        assert!(matches!(
            compile_type_signature(&AvroSchema::from(&schema)),
            Err(CodegenError::DepthExceeded { .. })
        ));
    }
}

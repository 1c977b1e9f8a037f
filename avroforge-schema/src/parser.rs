//! Avro JSON schema parser.
//!
//! This module parses Avro 1.11 JSON schema declarations into the internal
//! schema representation. Named types are registered as they are declared;
//! later occurrences of the same name become [`Schema::Reference`] leaves,
//! which keeps the tree acyclic even for recursive schemas.

use crate::error::{ParseError, SchemaError};
use crate::types::{
    ArraySchema, EnumSchema, Field, FixedDecimalSchema, FixedSchema, MAX_SCHEMA_DEPTH, MapSchema,
    Name, NamedKind, PrimitiveSchema, PrimitiveType, RecordSchema, ReferenceSchema, Schema,
    UnionSchema,
};
use crate::validation::{validate_name, validate_namespace, validate_symbols, validate_union};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Parses an Avro schema from a JSON string.
///
/// # Arguments
/// * `json` - Schema declaration in Avro JSON syntax
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or contains an invalid schema.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let value: Value = serde_json::from_str(json).map_err(ParseError::json)?;
    parse_schema_value(&value)
}

/// Parses an Avro schema from an already decoded JSON value.
///
/// # Errors
/// Returns `ParseError` if the value is not a valid schema declaration.
pub fn parse_schema_value(value: &Value) -> Result<Schema, ParseError> {
    SchemaParser::new().parse(value)
}

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    /// Converts a JSON value into a schema.
    ///
    /// Values that can never denote a schema (null, booleans, numbers and
    /// objects without a `type`) fail with [`SchemaError::TypeKind`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => Err(SchemaError::type_kind(value)),
            Value::Object(map) if !map.contains_key("type") => Err(SchemaError::type_kind(value)),
            _ => Ok(parse_schema_value(value)?),
        }
    }
}

/// Stateful parser tracking the named types declared so far.
#[derive(Debug, Default)]
pub struct SchemaParser {
    names: HashMap<String, NamedKind>,
}

impl SchemaParser {
    /// Creates a parser with an empty name table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a schema declaration.
    ///
    /// # Errors
    /// Returns `ParseError` if the declaration is invalid.
    pub fn parse(&mut self, value: &Value) -> Result<Schema, ParseError> {
        self.parse_node(value, None, 0)
    }

    fn parse_node(
        &mut self,
        value: &Value,
        enclosing: Option<&str>,
        depth: usize,
    ) -> Result<Schema, ParseError> {
        if depth > MAX_SCHEMA_DEPTH {
            return Err(ParseError::DepthExceeded {
                limit: MAX_SCHEMA_DEPTH,
            });
        }

        match value {
            Value::String(type_name) => self.parse_type_name(type_name, enclosing),
            Value::Array(alternatives) => {
                let schemas = alternatives
                    .iter()
                    .map(|alternative| self.parse_node(alternative, enclosing, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                validate_union(&schemas)?;
                Ok(Schema::Union(UnionSchema { schemas }))
            }
            Value::Object(map) => self.parse_object(map, enclosing, depth),
            other => Err(ParseError::invalid_attr("schema", "type", other.to_string())),
        }
    }

    /// Resolves a bare type name: a primitive or a previously declared type.
    fn parse_type_name(
        &self,
        type_name: &str,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        if let Some(primitive) = PrimitiveType::parse(type_name) {
            return Ok(Schema::primitive(primitive));
        }

        let candidates = match (type_name.contains('.'), enclosing) {
            (false, Some(namespace)) => vec![format!("{}.{}", namespace, type_name), type_name.to_string()],
            _ => vec![type_name.to_string()],
        };
        candidates
            .into_iter()
            .find_map(|fullname| {
                self.names.get(&fullname).map(|kind| {
                    Schema::Reference(ReferenceSchema {
                        name: Name::new(&fullname, None),
                        kind: *kind,
                    })
                })
            })
            .ok_or_else(|| {
                ParseError::unknown_type(type_name, enclosing.unwrap_or("default namespace"))
            })
    }

    fn parse_object(
        &mut self,
        map: &Map<String, Value>,
        enclosing: Option<&str>,
        depth: usize,
    ) -> Result<Schema, ParseError> {
        let type_value = map
            .get("type")
            .ok_or_else(|| ParseError::missing_attr("schema", "type"))?;

        let type_name = match type_value {
            Value::String(type_name) => type_name.as_str(),
            nested @ (Value::Object(_) | Value::Array(_)) => {
                return self.parse_node(nested, enclosing, depth + 1);
            }
            other => return Err(ParseError::invalid_attr("schema", "type", other.to_string())),
        };

        if let Some(primitive) = PrimitiveType::parse(type_name) {
            return Ok(Schema::Primitive(parse_primitive(primitive, map)?));
        }

        match type_name {
            "record" | "error" => self.parse_record(map, enclosing, depth, type_name == "error"),
            "enum" => self.parse_enum(map, enclosing),
            "fixed" => self.parse_fixed(map, enclosing),
            "array" => {
                let items = map
                    .get("items")
                    .ok_or_else(|| ParseError::missing_attr("array", "items"))?;
                Ok(Schema::Array(ArraySchema {
                    items: Box::new(self.parse_node(items, enclosing, depth + 1)?),
                }))
            }
            "map" => {
                let values = map
                    .get("values")
                    .ok_or_else(|| ParseError::missing_attr("map", "values"))?;
                Ok(Schema::Map(MapSchema {
                    values: Box::new(self.parse_node(values, enclosing, depth + 1)?),
                }))
            }
            reference => self.parse_type_name(reference, enclosing),
        }
    }

    fn parse_record(
        &mut self,
        map: &Map<String, Value>,
        enclosing: Option<&str>,
        depth: usize,
        is_error: bool,
    ) -> Result<Schema, ParseError> {
        let name = self.declare(map, enclosing, "record", NamedKind::Record)?;
        let record_namespace = name.namespace.clone();

        let raw_fields = match map.get("fields") {
            Some(Value::Array(fields)) => fields,
            Some(other) => {
                return Err(ParseError::invalid_attr(
                    name.fullname(),
                    "fields",
                    other.to_string(),
                ));
            }
            None => return Err(ParseError::missing_attr(name.fullname(), "fields")),
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw_fields.len());
        for raw_field in raw_fields {
            let field = self.parse_field(raw_field, &name, record_namespace.as_deref(), depth)?;
            if !seen.insert(field.name.clone()) {
                return Err(ParseError::duplicate("field", format!("{}.{}", name, field.name)));
            }
            fields.push(field);
        }

        Ok(Schema::Record(RecordSchema {
            doc: string_attr(map, "doc"),
            aliases: string_list(map, "aliases"),
            is_error,
            properties: extra_properties(
                map,
                &["type", "name", "namespace", "doc", "aliases", "fields"],
            ),
            fields,
            name,
        }))
    }

    fn parse_field(
        &mut self,
        value: &Value,
        record: &Name,
        namespace: Option<&str>,
        depth: usize,
    ) -> Result<Field, ParseError> {
        let map = value.as_object().ok_or_else(|| {
            ParseError::invalid_attr(record.fullname(), "fields", value.to_string())
        })?;
        let name = map
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::missing_attr(format!("field of {}", record), "name"))?;
        if !crate::validation::is_valid_identifier(name) {
            return Err(ParseError::invalid_name("field", name));
        }
        let type_value = map
            .get("type")
            .ok_or_else(|| ParseError::missing_attr(format!("field {}.{}", record, name), "type"))?;

        Ok(Field {
            name: name.to_string(),
            schema: self.parse_node(type_value, namespace, depth + 1)?,
            doc: string_attr(map, "doc"),
            default: map.get("default").cloned(),
            order: string_attr(map, "order"),
            aliases: string_list(map, "aliases"),
            properties: extra_properties(
                map,
                &["name", "type", "doc", "default", "order", "aliases"],
            ),
        })
    }

    fn parse_enum(
        &mut self,
        map: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let name = self.declare(map, enclosing, "enum", NamedKind::Enum)?;
        let symbols = match map.get("symbols") {
            Some(Value::Array(symbols)) => symbols
                .iter()
                .map(|symbol| {
                    symbol.as_str().map(str::to_string).ok_or_else(|| {
                        ParseError::invalid_attr(name.fullname(), "symbols", symbol.to_string())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ParseError::invalid_attr(
                    name.fullname(),
                    "symbols",
                    other.to_string(),
                ));
            }
            None => return Err(ParseError::missing_attr(name.fullname(), "symbols")),
        };
        validate_symbols(&symbols)?;

        let default = string_attr(map, "default");
        if let Some(default) = &default {
            if !symbols.contains(default) {
                return Err(ParseError::invalid_attr(name.fullname(), "default", default));
            }
        }

        Ok(Schema::Enum(EnumSchema {
            doc: string_attr(map, "doc"),
            aliases: string_list(map, "aliases"),
            properties: extra_properties(
                map,
                &["type", "name", "namespace", "doc", "aliases", "symbols", "default"],
            ),
            symbols,
            default,
            name,
        }))
    }

    fn parse_fixed(
        &mut self,
        map: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let name = self.declare(map, enclosing, "fixed", NamedKind::Fixed)?;
        let size = unsigned_attr(map, "size", &name.fullname())?
            .ok_or_else(|| ParseError::missing_attr(name.fullname(), "size"))?;
        let size = usize::try_from(size)
            .map_err(|_| ParseError::invalid_attr(name.fullname(), "size", size.to_string()))?;
        let doc = string_attr(map, "doc");
        let aliases = string_list(map, "aliases");
        let logical_type = string_attr(map, "logicalType");

        if logical_type.as_deref() == Some("decimal") {
            let (precision, scale) = decimal_attrs(map, &name.fullname())?;
            return Ok(Schema::FixedDecimal(FixedDecimalSchema {
                doc,
                aliases,
                size,
                precision,
                scale,
                properties: extra_properties(
                    map,
                    &[
                        "type",
                        "name",
                        "namespace",
                        "doc",
                        "aliases",
                        "size",
                        "logicalType",
                        "precision",
                        "scale",
                    ],
                ),
                name,
            }));
        }

        Ok(Schema::Fixed(FixedSchema {
            doc,
            aliases,
            size,
            logical_type,
            properties: extra_properties(
                map,
                &["type", "name", "namespace", "doc", "aliases", "size", "logicalType"],
            ),
            name,
        }))
    }

    /// Resolves and registers the name of a named type declaration.
    fn declare(
        &mut self,
        map: &Map<String, Value>,
        enclosing: Option<&str>,
        element: &str,
        kind: NamedKind,
    ) -> Result<Name, ParseError> {
        let raw_name = map
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::missing_attr(element, "name"))?;
        validate_name("type", raw_name)?;

        let namespace = match map.get("namespace") {
            Some(Value::String(namespace)) => {
                validate_namespace(namespace)?;
                Some(namespace.as_str())
            }
            Some(Value::Null) => Some(""),
            Some(other) => {
                return Err(ParseError::invalid_attr(raw_name, "namespace", other.to_string()));
            }
            None => enclosing,
        };

        let name = Name::new(raw_name, namespace);
        let fullname = name.fullname();
        if PrimitiveType::parse(&fullname).is_some() {
            return Err(ParseError::invalid_name("type", fullname));
        }
        if self.names.insert(fullname.clone(), kind).is_some() {
            return Err(ParseError::duplicate("named type", fullname));
        }
        tracing::trace!("declared {} '{}'", kind.type_name(), fullname);
        Ok(name)
    }
}

fn parse_primitive(
    primitive: PrimitiveType,
    map: &Map<String, Value>,
) -> Result<PrimitiveSchema, ParseError> {
    let logical_type = string_attr(map, "logicalType");
    if logical_type.as_deref() == Some("decimal") && primitive == PrimitiveType::Bytes {
        decimal_attrs(map, "bytes")?;
    }
    Ok(PrimitiveSchema {
        type_name: primitive.as_str().to_string(),
        logical_type,
        properties: extra_properties(map, &["type", "logicalType"]),
    })
}

/// Reads and checks `precision` and `scale` of a decimal declaration.
fn decimal_attrs(map: &Map<String, Value>, element: &str) -> Result<(u32, u32), ParseError> {
    let precision = unsigned_attr(map, "precision", element)?
        .ok_or_else(|| ParseError::missing_attr(element, "precision"))?;
    let scale = unsigned_attr(map, "scale", element)?.unwrap_or(0);
    if precision == 0 || scale > precision {
        return Err(ParseError::invalid_attr(
            element,
            "scale",
            format!("{} (precision {})", scale, precision),
        ));
    }
    let narrow = |value: u64, attribute: &str| {
        u32::try_from(value)
            .map_err(|_| ParseError::invalid_attr(element, attribute, value.to_string()))
    };
    Ok((narrow(precision, "precision")?, narrow(scale, "scale")?))
}

fn unsigned_attr(
    map: &Map<String, Value>,
    attribute: &str,
    element: &str,
) -> Result<Option<u64>, ParseError> {
    match map.get(attribute) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| ParseError::invalid_attr(element, attribute, value.to_string())),
    }
}

fn string_attr(map: &Map<String, Value>, attribute: &str) -> Option<String> {
    map.get(attribute).and_then(Value::as_str).map(str::to_string)
}

fn string_list(map: &Map<String, Value>, attribute: &str) -> Vec<String> {
    map.get(attribute)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn extra_properties(map: &Map<String, Value>, reserved: &[&str]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{
        "namespace": "com.acme",
        "type": "record",
        "name": "User",
        "fields": [
            {"name": "name", "type": "string"},
            {"name": "favorite_number", "type": ["int", "null"]},
            {"name": "favorite_color", "type": ["string", "null"]}
        ]
    }"#;

    #[test]
    fn test_parse_record() {
        let schema = parse_schema(USER).expect("Failed to parse");
        let Schema::Record(record) = schema else {
            panic!("expected record");
        };
        assert_eq!(record.name.fullname(), "com.acme.User");
        assert_eq!(record.fields.len(), 3);
        assert_eq!(record.fields[1].name, "favorite_number");
        assert!(matches!(record.fields[1].schema, Schema::Union(_)));
    }

    #[test]
    fn test_parse_primitives() {
        assert_eq!(
            parse_schema(r#""long""#).expect("Failed to parse"),
            Schema::primitive(PrimitiveType::Long)
        );
        let logical = parse_schema(r#"{"type": "int", "logicalType": "date"}"#)
            .expect("Failed to parse");
        assert_eq!(logical, Schema::logical(PrimitiveType::Int, "date"));
    }

    #[test]
    fn test_parse_fixed_decimal() {
        let schema = parse_schema(
            r#"{"type": "fixed", "name": "FixNum", "size": 16, "logicalType": "decimal", "precision": 4, "scale": 2}"#,
        )
        .expect("Failed to parse");
        let Schema::FixedDecimal(decimal) = schema else {
            panic!("expected fixed decimal");
        };
        assert_eq!((decimal.size, decimal.precision, decimal.scale), (16, 4, 2));
    }

    #[test]
    fn test_decimal_scale_defaults_to_zero() {
        let schema = parse_schema(
            r#"{"type": "fixed", "name": "Amount", "size": 8, "logicalType": "decimal", "precision": 10}"#,
        )
        .expect("Failed to parse");
        assert!(matches!(schema, Schema::FixedDecimal(FixedDecimalSchema { scale: 0, .. })));
    }

    #[test]
    fn test_namespace_inheritance_and_references() {
        let schema = parse_schema(
            r#"{
                "type": "record", "name": "Outer", "namespace": "com.acme",
                "fields": [
                    {"name": "inner", "type": {"type": "enum", "name": "Suit", "symbols": ["A"]}},
                    {"name": "again", "type": "Suit"},
                    {"name": "next", "type": ["null", "Outer"]}
                ]
            }"#,
        )
        .expect("Failed to parse");
        let Schema::Record(record) = schema else {
            panic!("expected record");
        };
        let Schema::Enum(suit) = &record.fields[0].schema else {
            panic!("expected enum");
        };
        assert_eq!(suit.name.fullname(), "com.acme.Suit");
        assert_eq!(
            record.fields[1].schema,
            Schema::Reference(ReferenceSchema {
                name: Name::new("com.acme.Suit", None),
                kind: NamedKind::Enum,
            })
        );
        let Schema::Union(next) = &record.fields[2].schema else {
            panic!("expected union");
        };
        assert!(matches!(
            &next.schemas[1],
            Schema::Reference(ReferenceSchema { kind: NamedKind::Record, .. })
        ));
    }

    #[test]
    fn test_unknown_type() {
        let result = parse_schema(
            r#"{"type": "record", "name": "R", "fields": [{"name": "x", "type": "Missing"}]}"#,
        );
        assert!(matches!(result, Err(ParseError::UnknownType { .. })));
    }

    #[test]
    fn test_duplicate_named_type() {
        let result = parse_schema(
            r#"{"type": "record", "name": "R", "fields": [
                {"name": "a", "type": {"type": "fixed", "name": "F", "size": 1}},
                {"name": "b", "type": {"type": "fixed", "name": "F", "size": 2}}
            ]}"#,
        );
        assert!(matches!(result, Err(ParseError::DuplicateDefinition { .. })));
    }

    #[test]
    fn test_depth_exceeded() {
        let mut json = String::from(r#""int""#);
        for _ in 0..=MAX_SCHEMA_DEPTH {
            json = format!(r#"{{"type": "array", "items": {}}}"#, json);
        }
        let result = parse_schema(&json);
        assert!(matches!(
            result,
            Err(ParseError::DepthExceeded { limit }) if limit == MAX_SCHEMA_DEPTH
        ));
    }

    #[test]
    fn test_depth_limit_accepts_boundary() {
        let mut json = String::from(r#""int""#);
        for _ in 0..MAX_SCHEMA_DEPTH {
            json = format!(r#"{{"type": "array", "items": {}}}"#, json);
        }
        parse_schema(&json).expect("Failed to parse schema at the depth limit");
    }

    #[test]
    fn test_depth_exceeded_through_records() {
        let mut json = String::from(r#""int""#);
        for level in 0..=MAX_SCHEMA_DEPTH {
            json = format!(
                r#"{{"type": "record", "name": "R{}", "fields": [{{"name": "f", "type": {}}}]}}"#,
                level, json
            );
        }
        let result = parse_schema(&json);
        assert!(matches!(result, Err(ParseError::DepthExceeded { .. })));
    }

    #[test]
    fn test_try_from_rejects_non_schema_values() {
        let number = serde_json::json!(42);
        assert!(matches!(
            Schema::try_from(&number),
            Err(SchemaError::TypeKind { .. })
        ));
        let untyped = serde_json::json!({"name": "x"});
        assert!(matches!(
            Schema::try_from(&untyped),
            Err(SchemaError::TypeKind { .. })
        ));
        assert!(Schema::try_from(&serde_json::json!("string")).is_ok());
    }
}

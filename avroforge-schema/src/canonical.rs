//! Canonical and raw JSON forms of a schema.
//!
//! The canonical form follows Avro's Parsing Canonical Form: primitives are
//! reduced to their bare name, named types are fully qualified, only the
//! `name`, `type`, `fields`, `symbols`, `items`, `values` and `size`
//! attributes survive, keys appear in that order and no whitespace is emitted.
//!
//! The raw form keeps every declared attribute so the schema can be parsed
//! back with logical types, defaults and documentation intact.

use crate::types::{Field, Name, Schema};
use serde_json::{Map, Value, json};

impl Schema {
    /// Returns the Parsing Canonical Form of this schema.
    #[must_use]
    pub fn canonical_form(&self) -> String {
        canonical_value(self).to_string()
    }

    /// Returns the raw JSON form of this schema.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Returns the raw JSON form of this schema as a value.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        raw_value(self, None)
    }
}

impl Field {
    /// Returns the canonical form of this field.
    #[must_use]
    pub fn canonical_form(&self) -> String {
        canonical_field(self).to_string()
    }

    /// Returns the raw JSON form of this field.
    #[must_use]
    pub fn to_json(&self) -> String {
        raw_field(self, None).to_string()
    }
}

/// Returns the canonical name of a named type.
///
/// This is the single qualification rule shared by the canonical form and
/// every `fullname` accessor.
#[must_use]
pub fn canonical_name(name: &Name) -> String {
    name.fullname()
}

fn canonical_value(schema: &Schema) -> Value {
    match schema {
        Schema::Primitive(primitive) => Value::String(primitive.type_name.clone()),
        Schema::Record(record) => {
            let fields: Vec<Value> = record.fields.iter().map(canonical_field).collect();
            json!({
                "name": canonical_name(&record.name),
                "type": if record.is_error { "error" } else { "record" },
                "fields": fields,
            })
        }
        Schema::Enum(enum_schema) => json!({
            "name": canonical_name(&enum_schema.name),
            "type": "enum",
            "symbols": enum_schema.symbols,
        }),
        Schema::Array(array) => json!({
            "type": "array",
            "items": canonical_value(&array.items),
        }),
        Schema::Map(map) => json!({
            "type": "map",
            "values": canonical_value(&map.values),
        }),
        Schema::Fixed(fixed) => json!({
            "name": canonical_name(&fixed.name),
            "type": "fixed",
            "size": fixed.size,
        }),
        Schema::FixedDecimal(decimal) => json!({
            "name": canonical_name(&decimal.name),
            "type": "fixed",
            "size": decimal.size,
        }),
        Schema::Union(union) => Value::Array(union.schemas.iter().map(canonical_value).collect()),
        Schema::Reference(reference) => Value::String(canonical_name(&reference.name)),
    }
}

fn canonical_field(field: &Field) -> Value {
    json!({
        "name": field.name,
        "type": canonical_value(&field.schema),
    })
}

/// Builds the raw form; `enclosing` is the namespace of the nearest named parent.
fn raw_value(schema: &Schema, enclosing: Option<&str>) -> Value {
    match schema {
        Schema::Primitive(primitive) => {
            if primitive.logical_type.is_none() && primitive.properties.is_empty() {
                return Value::String(primitive.type_name.clone());
            }
            let mut map = Map::new();
            map.insert("type".into(), json!(primitive.type_name));
            if let Some(logical_type) = &primitive.logical_type {
                map.insert("logicalType".into(), json!(logical_type));
            }
            extend(&mut map, &primitive.properties);
            Value::Object(map)
        }
        Schema::Record(record) => {
            let namespace = record.name.namespace.as_deref();
            let mut map = named_header(
                if record.is_error { "error" } else { "record" },
                &record.name,
                enclosing,
                record.doc.as_deref(),
                &record.aliases,
            );
            let fields: Vec<Value> = record
                .fields
                .iter()
                .map(|field| raw_field(field, namespace))
                .collect();
            map.insert("fields".into(), Value::Array(fields));
            extend(&mut map, &record.properties);
            Value::Object(map)
        }
        Schema::Enum(enum_schema) => {
            let mut map = named_header(
                "enum",
                &enum_schema.name,
                enclosing,
                enum_schema.doc.as_deref(),
                &enum_schema.aliases,
            );
            map.insert("symbols".into(), json!(enum_schema.symbols));
            if let Some(default) = &enum_schema.default {
                map.insert("default".into(), json!(default));
            }
            extend(&mut map, &enum_schema.properties);
            Value::Object(map)
        }
        Schema::Fixed(fixed) => {
            let mut map = named_header(
                "fixed",
                &fixed.name,
                enclosing,
                fixed.doc.as_deref(),
                &fixed.aliases,
            );
            map.insert("size".into(), json!(fixed.size));
            if let Some(logical_type) = &fixed.logical_type {
                map.insert("logicalType".into(), json!(logical_type));
            }
            extend(&mut map, &fixed.properties);
            Value::Object(map)
        }
        Schema::FixedDecimal(decimal) => {
            let mut map = named_header(
                "fixed",
                &decimal.name,
                enclosing,
                decimal.doc.as_deref(),
                &decimal.aliases,
            );
            map.insert("size".into(), json!(decimal.size));
            map.insert("logicalType".into(), json!("decimal"));
            map.insert("precision".into(), json!(decimal.precision));
            map.insert("scale".into(), json!(decimal.scale));
            extend(&mut map, &decimal.properties);
            Value::Object(map)
        }
        Schema::Array(array) => json!({
            "type": "array",
            "items": raw_value(&array.items, enclosing),
        }),
        Schema::Map(map) => json!({
            "type": "map",
            "values": raw_value(&map.values, enclosing),
        }),
        Schema::Union(union) => Value::Array(
            union
                .schemas
                .iter()
                .map(|alternative| raw_value(alternative, enclosing))
                .collect(),
        ),
        Schema::Reference(reference) => Value::String(reference.name.fullname()),
    }
}

fn raw_field(field: &Field, enclosing: Option<&str>) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!(field.name));
    map.insert("type".into(), raw_value(&field.schema, enclosing));
    if let Some(doc) = &field.doc {
        map.insert("doc".into(), json!(doc));
    }
    if let Some(default) = &field.default {
        map.insert("default".into(), default.clone());
    }
    if let Some(order) = &field.order {
        map.insert("order".into(), json!(order));
    }
    if !field.aliases.is_empty() {
        map.insert("aliases".into(), json!(field.aliases));
    }
    extend(&mut map, &field.properties);
    Value::Object(map)
}

/// Emits `type`, `name` and, when it differs from the enclosing one, `namespace`.
fn named_header(
    type_name: &str,
    name: &Name,
    enclosing: Option<&str>,
    doc: Option<&str>,
    aliases: &[String],
) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".into(), json!(type_name));
    map.insert("name".into(), json!(name.name));
    match (name.namespace.as_deref(), enclosing) {
        (Some(namespace), Some(parent)) if namespace == parent => {}
        (Some(namespace), _) => {
            map.insert("namespace".into(), json!(namespace));
        }
        (None, Some(_)) => {
            map.insert("namespace".into(), json!(""));
        }
        (None, None) => {}
    }
    if let Some(doc) = doc {
        map.insert("doc".into(), json!(doc));
    }
    if !aliases.is_empty() {
        map.insert("aliases".into(), json!(aliases));
    }
    map
}

fn extend(map: &mut Map<String, Value>, properties: &Map<String, Value>) {
    for (key, value) in properties {
        map.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_schema;

    #[test]
    fn test_record_canonical_form() {
        let schema = parse_schema(
            r#"{
                "namespace": "com.acme",
                "type": "record",
                "name": "User",
                "doc": "A user",
                "fields": [
                    {"name": "name", "type": "string", "doc": "full name"},
                    {"name": "favorite_number", "type": ["int", "null"], "default": 1}
                ]
            }"#,
        )
        .expect("Failed to parse");
        assert_eq!(
            schema.canonical_form(),
            r#"{"name":"com.acme.User","type":"record","fields":[{"name":"name","type":"string"},{"name":"favorite_number","type":["int","null"]}]}"#
        );
    }

    #[test]
    fn test_logical_types_are_stripped() {
        let schema = parse_schema(r#"{"type": "long", "logicalType": "timestamp-millis"}"#)
            .expect("Failed to parse");
        assert_eq!(schema.canonical_form(), r#""long""#);
        assert_eq!(
            schema.to_json(),
            r#"{"type":"long","logicalType":"timestamp-millis"}"#
        );
    }

    #[test]
    fn test_enum_and_fixed_canonical_form() {
        let suit = parse_schema(
            r#"{"type": "enum", "name": "Suit", "namespace": "cards", "symbols": ["SPADES", "HEARTS"]}"#,
        )
        .expect("Failed to parse");
        assert_eq!(
            suit.canonical_form(),
            r#"{"name":"cards.Suit","type":"enum","symbols":["SPADES","HEARTS"]}"#
        );

        let decimal = parse_schema(
            r#"{"type": "fixed", "name": "FixNum", "size": 16, "logicalType": "decimal", "precision": 4, "scale": 2}"#,
        )
        .expect("Failed to parse");
        assert_eq!(
            decimal.canonical_form(),
            r#"{"name":"FixNum","type":"fixed","size":16}"#
        );
    }

    #[test]
    fn test_raw_form_keeps_attributes() {
        let schema = parse_schema(
            r#"{"type": "record", "name": "Outer", "namespace": "com.acme", "fields": [
                {"name": "inner", "type": {"type": "record", "name": "Inner", "fields": []}},
                {"name": "other", "type": {"type": "record", "name": "Other", "namespace": "org.acme", "fields": []}}
            ]}"#,
        )
        .expect("Failed to parse");
        let raw = schema.to_json_value();
        assert_eq!(raw["namespace"], "com.acme");
        assert!(raw["fields"][0]["type"].get("namespace").is_none());
        assert_eq!(raw["fields"][1]["type"]["namespace"], "org.acme");
        let reparsed = parse_schema(&schema.to_json()).expect("Failed to reparse");
        assert_eq!(reparsed, schema);
    }
}

//! Schema-directed conversion between [`Datum`] and the physical values of
//! the `apache-avro` codec.
//!
//! The codec is driven by the canonical schema, which has no logical types.
//! The walker follows the raw schema instead, so logical datums are lowered
//! to their physical encoding with the declared precision, and raised back
//! after decoding. Union branches are chosen by trying each branch in order,
//! first requiring an exact kind match and then accepting width conversions.

use super::convert::{date_from_epoch_days, date_to_epoch_days};
use super::datum::{Datum, latin1_decode};
use super::error::{CoreError, Result};
use super::record::RecordDatum;
use apache_avro::types::Value as AvroValue;
use chrono::{DateTime, NaiveTime, Timelike};
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

const TARGET: &str = "apache-avro value";

/// Walker over a raw schema document.
#[derive(Debug, Clone)]
pub struct SchemaWalker {
    root: Value,
    names: HashMap<String, (Value, Option<String>)>,
}

impl SchemaWalker {
    /// Parses a raw schema and indexes its named types.
    ///
    /// # Errors
    /// Returns `CoreError::Json` if the schema is not valid JSON.
    pub fn new(schema: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(schema)?;
        let mut names = HashMap::new();
        index_names(&root, None, &mut names);
        Ok(Self { root, names })
    }

    /// Lowers a datum to a physical codec value.
    ///
    /// # Errors
    /// Returns `CoreError::Value` if the datum does not match the schema.
    pub fn lower(&self, datum: &Datum) -> Result<AvroValue> {
        self.lower_node(datum, &self.root, None, false)
    }

    /// Raises a decoded codec value to a datum.
    ///
    /// # Errors
    /// Returns `CoreError::Value` if the value does not match the schema.
    pub fn raise(&self, value: AvroValue) -> Result<Datum> {
        self.raise_node(value, &self.root, None)
    }

    fn resolve<'s>(
        &'s self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<(&'s Value, Option<&'s str>)> {
        let qualified = match namespace {
            Some(namespace) if !name.contains('.') => Some(format!("{}.{}", namespace, name)),
            _ => None,
        };
        qualified
            .and_then(|fullname| self.names.get(&fullname))
            .or_else(|| self.names.get(name))
            .map(|(schema, namespace)| (schema, namespace.as_deref()))
            .ok_or_else(|| CoreError::value(TARGET, format!("unknown type '{}'", name)))
    }

    fn lower_node(
        &self,
        datum: &Datum,
        schema: &Value,
        namespace: Option<&str>,
        strict: bool,
    ) -> Result<AvroValue> {
        match schema {
            Value::String(type_name) => match lower_primitive(datum, type_name, None, strict) {
                Some(result) => result,
                None => {
                    let (definition, namespace) = self.resolve(type_name, namespace)?;
                    self.lower_node(datum, definition, namespace, strict)
                }
            },
            Value::Array(branches) => self.lower_union(datum, branches, namespace),
            Value::Object(object) => self.lower_object(datum, object, namespace, strict),
            other => Err(CoreError::value(TARGET, format!("invalid schema {}", other))),
        }
    }

    fn lower_union(
        &self,
        datum: &Datum,
        branches: &[Value],
        namespace: Option<&str>,
    ) -> Result<AvroValue> {
        for strict in [true, false] {
            for (index, branch) in branches.iter().enumerate() {
                if let Ok(value) = self.lower_node(datum, branch, namespace, strict) {
                    let index = u32::try_from(index)
                        .map_err(|_| CoreError::value(TARGET, "too many union branches"))?;
                    return Ok(AvroValue::Union(index, Box::new(value)));
                }
            }
        }
        Err(CoreError::unexpected(TARGET, "a union branch", datum.kind()))
    }

    fn lower_object(
        &self,
        datum: &Datum,
        object: &Map<String, Value>,
        namespace: Option<&str>,
        strict: bool,
    ) -> Result<AvroValue> {
        let type_value = object
            .get("type")
            .ok_or_else(|| CoreError::value(TARGET, "schema without type"))?;
        let Value::String(type_name) = type_value else {
            return self.lower_node(datum, type_value, namespace, strict);
        };
        let logical_type = object.get("logicalType").and_then(Value::as_str);
        if let Some(result) = lower_primitive(datum, type_name, logical_type, strict) {
            return result;
        }
        let own_namespace = declared_namespace(object, namespace);
        let namespace = own_namespace.as_deref();

        match (type_name.as_str(), datum) {
            ("record" | "error", Datum::Record(record)) => {
                self.lower_fields(object, |name| record.get(name), namespace, strict)
            }
            ("record" | "error", Datum::Map(entries)) => {
                self.lower_fields(object, |name| entries.get(name), namespace, strict)
            }
            ("enum", Datum::Enum(symbol) | Datum::String(symbol)) => {
                let index = object
                    .get("symbols")
                    .and_then(Value::as_array)
                    .and_then(|symbols| symbols.iter().position(|s| s.as_str() == Some(symbol.as_str())))
                    .ok_or_else(|| {
                        CoreError::value(TARGET, format!("unknown symbol '{}'", symbol))
                    })?;
                let index = u32::try_from(index)
                    .map_err(|_| CoreError::value(TARGET, "too many symbols"))?;
                Ok(AvroValue::Enum(index, symbol.clone()))
            }
            ("fixed", Datum::Fixed(bytes) | Datum::Bytes(bytes)) => {
                let size = object
                    .get("size")
                    .and_then(Value::as_u64)
                    .and_then(|size| usize::try_from(size).ok())
                    .ok_or_else(|| CoreError::value(TARGET, "fixed without size"))?;
                if bytes.len() != size {
                    return Err(CoreError::value(
                        TARGET,
                        format!("fixed of size {} holds {} bytes", size, bytes.len()),
                    ));
                }
                Ok(AvroValue::Fixed(size, bytes.to_vec()))
            }
            ("array", Datum::Array(items)) => {
                let schema = object
                    .get("items")
                    .ok_or_else(|| CoreError::value(TARGET, "array without items"))?;
                items
                    .iter()
                    .map(|item| self.lower_node(item, schema, namespace, strict))
                    .collect::<Result<Vec<_>>>()
                    .map(AvroValue::Array)
            }
            ("map", Datum::Map(entries)) => {
                let schema = object
                    .get("values")
                    .ok_or_else(|| CoreError::value(TARGET, "map without values"))?;
                entries
                    .iter()
                    .map(|(key, value)| {
                        self.lower_node(value, schema, namespace, strict)
                            .map(|value| (key.clone(), value))
                    })
                    .collect::<Result<HashMap<_, _>>>()
                    .map(AvroValue::Map)
            }
            (
                "record" | "error" | "enum" | "fixed" | "array" | "map",
                other,
            ) => Err(CoreError::unexpected(TARGET, type_name, other.kind())),
            (reference, _) => {
                let (definition, namespace) = self.resolve(reference, namespace)?;
                self.lower_node(datum, definition, namespace, strict)
            }
        }
    }

    fn lower_fields<'d>(
        &self,
        object: &Map<String, Value>,
        lookup: impl Fn(&str) -> Option<&'d Datum>,
        namespace: Option<&str>,
        strict: bool,
    ) -> Result<AvroValue> {
        let fields = object
            .get("fields")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::value(TARGET, "record without fields"))?;
        let mut lowered = Vec::with_capacity(fields.len());
        for field in fields {
            let (name, schema) = field_parts(field)?;
            let value = lookup(name).unwrap_or(&Datum::Null);
            lowered.push((name.to_string(), self.lower_node(value, schema, namespace, strict)?));
        }
        Ok(AvroValue::Record(lowered))
    }

    fn raise_node(&self, value: AvroValue, schema: &Value, namespace: Option<&str>) -> Result<Datum> {
        match schema {
            Value::String(type_name) => match raise_primitive(&value, type_name, None) {
                Some(result) => result,
                None => {
                    let (definition, namespace) = self.resolve(type_name, namespace)?;
                    self.raise_node(value, definition, namespace)
                }
            },
            Value::Array(branches) => match value {
                AvroValue::Union(index, inner) => {
                    let branch = usize::try_from(index)
                        .ok()
                        .and_then(|index| branches.get(index))
                        .ok_or_else(|| {
                            CoreError::value(TARGET, format!("union branch {} out of range", index))
                        })?;
                    self.raise_node(*inner, branch, namespace)
                }
                other => Err(CoreError::value(TARGET, format!("expected union, found {:?}", other))),
            },
            Value::Object(object) => self.raise_object(value, object, namespace),
            other => Err(CoreError::value(TARGET, format!("invalid schema {}", other))),
        }
    }

    fn raise_object(
        &self,
        value: AvroValue,
        object: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<Datum> {
        let type_value = object
            .get("type")
            .ok_or_else(|| CoreError::value(TARGET, "schema without type"))?;
        let Value::String(type_name) = type_value else {
            return self.raise_node(value, type_value, namespace);
        };
        let logical_type = object.get("logicalType").and_then(Value::as_str);
        if let Some(result) = raise_primitive(&value, type_name, logical_type) {
            return result;
        }
        let own_namespace = declared_namespace(object, namespace);
        let namespace = own_namespace.as_deref();

        match (type_name.as_str(), value) {
            ("record" | "error", AvroValue::Record(values)) => {
                let fields = object
                    .get("fields")
                    .and_then(Value::as_array)
                    .ok_or_else(|| CoreError::value(TARGET, "record without fields"))?;
                let mut values: HashMap<String, AvroValue> = values.into_iter().collect();
                let mut record = RecordDatum::with_capacity(fields.len());
                for field in fields {
                    let (name, schema) = field_parts(field)?;
                    let value = values.remove(name).unwrap_or(AvroValue::Null);
                    record.insert(name, self.raise_node(value, schema, namespace)?);
                }
                Ok(Datum::Record(record))
            }
            ("enum", AvroValue::Enum(_, symbol)) => Ok(Datum::Enum(symbol)),
            ("fixed", AvroValue::Fixed(_, bytes)) => Ok(Datum::Fixed(bytes.into())),
            ("array", AvroValue::Array(items)) => {
                let schema = object
                    .get("items")
                    .ok_or_else(|| CoreError::value(TARGET, "array without items"))?;
                items
                    .into_iter()
                    .map(|item| self.raise_node(item, schema, namespace))
                    .collect::<Result<Vec<_>>>()
                    .map(Datum::Array)
            }
            ("map", AvroValue::Map(entries)) => {
                let schema = object
                    .get("values")
                    .ok_or_else(|| CoreError::value(TARGET, "map without values"))?;
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        self.raise_node(value, schema, namespace).map(|value| (key, value))
                    })
                    .collect::<Result<_>>()
                    .map(Datum::Map)
            }
            ("record" | "error" | "enum" | "fixed" | "array" | "map", other) => Err(
                CoreError::value(TARGET, format!("expected {}, found {:?}", type_name, other)),
            ),
            (reference, value) => {
                let (definition, namespace) = self.resolve(reference, namespace)?;
                self.raise_node(value, definition, namespace)
            }
        }
    }
}

fn field_parts(field: &Value) -> Result<(&str, &Value)> {
    let name = field
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::value(TARGET, "field without name"))?;
    let schema = field
        .get("type")
        .ok_or_else(|| CoreError::value(TARGET, format!("field '{}' without type", name)))?;
    Ok((name, schema))
}

/// Namespace in effect inside a declaration; unnamed nodes keep the enclosing one.
fn declared_namespace(object: &Map<String, Value>, enclosing: Option<&str>) -> Option<String> {
    let Some(name) = object.get("name").and_then(Value::as_str) else {
        return enclosing.map(str::to_string);
    };
    if let Some((namespace, _)) = name.rsplit_once('.') {
        return Some(namespace.to_string());
    }
    match object.get("namespace") {
        Some(Value::String(namespace)) if namespace.is_empty() => None,
        Some(Value::String(namespace)) => Some(namespace.clone()),
        Some(Value::Null) => None,
        _ => enclosing.map(str::to_string),
    }
}

fn index_names(
    schema: &Value,
    enclosing: Option<&str>,
    names: &mut HashMap<String, (Value, Option<String>)>,
) {
    match schema {
        Value::Array(branches) => {
            for branch in branches {
                index_names(branch, enclosing, names);
            }
        }
        Value::Object(object) => {
            let type_name = object.get("type").and_then(Value::as_str);
            let named = matches!(type_name, Some("record" | "error" | "enum" | "fixed"));
            let namespace = if named {
                declared_namespace(object, enclosing)
            } else {
                enclosing.map(str::to_string)
            };
            if named {
                if let Some(name) = object.get("name").and_then(Value::as_str) {
                    let simple = name.rsplit('.').next().unwrap_or(name);
                    let fullname = match &namespace {
                        Some(namespace) => format!("{}.{}", namespace, simple),
                        None => simple.to_string(),
                    };
                    names.insert(fullname, (schema.clone(), namespace.clone()));
                }
            }
            let namespace = namespace.as_deref();
            if let Some(fields) = object.get("fields").and_then(Value::as_array) {
                for field in fields {
                    if let Some(field_type) = field.get("type") {
                        index_names(field_type, namespace, names);
                    }
                }
            }
            for key in ["type", "items", "values"] {
                if let Some(child) = object.get(key).filter(|child| !child.is_string()) {
                    index_names(child, namespace, names);
                }
            }
        }
        _ => {}
    }
}

/// Lowers a datum against a primitive type name.
///
/// Returns `None` when `type_name` is not a primitive.
fn lower_primitive(
    datum: &Datum,
    type_name: &str,
    logical_type: Option<&str>,
    strict: bool,
) -> Option<Result<AvroValue>> {
    let value = match (type_name, datum) {
        ("null", Datum::Null) => Some(AvroValue::Null),
        ("boolean", Datum::Boolean(value)) => Some(AvroValue::Boolean(*value)),
        ("int", Datum::Int(value)) => Some(AvroValue::Int(*value)),
        ("int", Datum::Long(value)) if !strict => i32::try_from(*value).ok().map(AvroValue::Int),
        ("int", Datum::Date(date)) => Some(AvroValue::Int(date_to_epoch_days(*date))),
        ("int", Datum::Time(time)) => {
            i32::try_from(time_to_micros(*time) / 1_000).ok().map(AvroValue::Int)
        }
        ("long", Datum::Long(value)) => Some(AvroValue::Long(*value)),
        ("long", Datum::Int(value)) if !strict => Some(AvroValue::Long(i64::from(*value))),
        ("long", Datum::Time(time)) => Some(AvroValue::Long(match logical_type {
            Some("time-millis") => time_to_micros(*time) / 1_000,
            _ => time_to_micros(*time),
        })),
        ("long", Datum::Timestamp(timestamp)) => Some(AvroValue::Long(match logical_type {
            Some("timestamp-micros") => timestamp.timestamp_micros(),
            _ => timestamp.timestamp_millis(),
        })),
        ("float", Datum::Float(value)) => Some(AvroValue::Float(*value)),
        #[allow(clippy::cast_possible_truncation)]
        ("float", Datum::Double(value)) if !strict => Some(AvroValue::Float(*value as f32)),
        ("double", Datum::Double(value)) => Some(AvroValue::Double(*value)),
        ("double", Datum::Float(value)) if !strict => Some(AvroValue::Double(f64::from(*value))),
        ("bytes", Datum::Bytes(value)) => Some(AvroValue::Bytes(value.to_vec())),
        ("bytes", Datum::Fixed(value)) if !strict => Some(AvroValue::Bytes(value.to_vec())),
        ("bytes", Datum::String(text)) if !strict => Some(AvroValue::Bytes(latin1_decode(text))),
        ("string", Datum::String(value)) => Some(AvroValue::String(value.clone())),
        ("string", Datum::Uuid(uuid)) => Some(AvroValue::String(uuid.hyphenated().to_string())),
        ("string", Datum::Enum(symbol)) if !strict => Some(AvroValue::String(symbol.clone())),
        ("null" | "boolean" | "int" | "long" | "float" | "double" | "bytes" | "string", _) => None,
        _ => return None,
    };
    Some(value.ok_or_else(|| CoreError::unexpected(TARGET, type_name, datum.kind())))
}

/// Raises a physical value against a primitive type name.
///
/// Returns `None` when `type_name` is not a primitive.
fn raise_primitive(
    value: &AvroValue,
    type_name: &str,
    logical_type: Option<&str>,
) -> Option<Result<Datum>> {
    let datum = match (type_name, value) {
        ("null", AvroValue::Null) => Ok(Datum::Null),
        ("boolean", AvroValue::Boolean(value)) => Ok(Datum::Boolean(*value)),
        ("int", AvroValue::Int(value)) => match logical_type {
            Some("date") => date_from_epoch_days(*value).map(Datum::Date),
            Some("time-millis") => time_from_micros(i64::from(*value) * 1_000).map(Datum::Time),
            _ => Ok(Datum::Int(*value)),
        },
        ("long", AvroValue::Long(value)) => match logical_type {
            Some("time-micros") => time_from_micros(*value).map(Datum::Time),
            Some("timestamp-millis") => DateTime::from_timestamp_millis(*value)
                .map(Datum::Timestamp)
                .ok_or_else(|| CoreError::value(TARGET, format!("timestamp {} out of range", value))),
            Some("timestamp-micros") => DateTime::from_timestamp_micros(*value)
                .map(Datum::Timestamp)
                .ok_or_else(|| CoreError::value(TARGET, format!("timestamp {} out of range", value))),
            _ => Ok(Datum::Long(*value)),
        },
        ("float", AvroValue::Float(value)) => Ok(Datum::Float(*value)),
        ("double", AvroValue::Double(value)) => Ok(Datum::Double(*value)),
        ("bytes", AvroValue::Bytes(value)) => Ok(Datum::Bytes(value.clone().into())),
        ("string", AvroValue::String(value)) => match logical_type {
            Some("uuid") => Ok(Uuid::parse_str(value)
                .map(Datum::Uuid)
                .unwrap_or_else(|_| Datum::String(value.clone()))),
            _ => Ok(Datum::String(value.clone())),
        },
        ("null" | "boolean" | "int" | "long" | "float" | "double" | "bytes" | "string", other) => {
            Err(CoreError::value(
                TARGET,
                format!("expected {}, found {:?}", type_name, other),
            ))
        }
        _ => return None,
    };
    Some(datum)
}

fn time_to_micros(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * 1_000_000 + i64::from(time.nanosecond() / 1_000)
}

fn time_from_micros(micros: i64) -> Result<NaiveTime> {
    let seconds = u32::try_from(micros.div_euclid(1_000_000)).ok();
    let nanos = u32::try_from(micros.rem_euclid(1_000_000) * 1_000).ok();
    seconds
        .zip(nanos)
        .and_then(|(seconds, nanos)| NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos))
        .ok_or_else(|| CoreError::value(TARGET, format!("time {}us out of range", micros)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EVENT: &str = r#"{
        "type": "record", "name": "Event", "namespace": "com.acme",
        "fields": [
            {"name": "at", "type": {"type": "long", "logicalType": "timestamp-micros"}},
            {"name": "day", "type": {"type": "int", "logicalType": "date"}},
            {"name": "kind", "type": {"type": "enum", "name": "Kind", "symbols": ["A", "B"]}},
            {"name": "again", "type": ["null", "Kind"]},
            {"name": "count", "type": ["int", "long"]}
        ]
    }"#;

    fn event() -> Datum {
        let mut record = RecordDatum::new();
        record.insert(
            "at",
            Datum::Timestamp(DateTime::from_timestamp_micros(1_500_000_000_000_001).expect("valid")),
        );
        record.insert("day", Datum::Date(NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid")));
        record.insert("kind", Datum::Enum("B".into()));
        record.insert("again", Datum::Enum("A".into()));
        record.insert("count", Datum::Long(3));
        Datum::Record(record)
    }

    #[test]
    fn test_lower_logical_and_unions() {
        let walker = SchemaWalker::new(EVENT).expect("Failed to parse");
        let AvroValue::Record(fields) = walker.lower(&event()).expect("Failed to lower") else {
            panic!("expected record");
        };
        assert_eq!(fields[0].1, AvroValue::Long(1_500_000_000_000_001));
        assert_eq!(fields[1].1, AvroValue::Int(18_263));
        assert_eq!(fields[2].1, AvroValue::Enum(1, "B".into()));
        assert_eq!(
            fields[3].1,
            AvroValue::Union(1, Box::new(AvroValue::Enum(0, "A".into())))
        );
        assert_eq!(fields[4].1, AvroValue::Union(1, Box::new(AvroValue::Long(3))));
    }

    #[test]
    fn test_raise_inverts_lower() {
        let walker = SchemaWalker::new(EVENT).expect("Failed to parse");
        let lowered = walker.lower(&event()).expect("Failed to lower");
        assert_eq!(walker.raise(lowered).expect("Failed to raise"), event());
    }

    #[test]
    fn test_rejects_mismatch() {
        let walker = SchemaWalker::new(r#"{"type": "fixed", "name": "F", "size": 2}"#)
            .expect("Failed to parse");
        assert!(walker.lower(&Datum::Fixed(vec![1u8].into())).is_err());
        assert!(walker.lower(&Datum::Int(1)).is_err());
    }

    #[test]
    fn test_time_micros() {
        let time = NaiveTime::from_hms_micro_opt(1, 2, 3, 4).expect("valid");
        assert_eq!(time_from_micros(time_to_micros(time)).expect("valid"), time);
    }
}

//! Plain nested value representation of Avro data.
//!
//! [`Datum`] mirrors the shape of a canonical schema: generated types encode
//! into it and decode from it, and drivers move it to and from the wire.
//! Logical values keep their rich form (`Uuid`, `Date`, `Time`, `Timestamp`)
//! until a driver lowers them against the schema.

use super::record::RecordDatum;
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Avro value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// `null`.
    Null,
    /// `boolean`.
    Boolean(bool),
    /// `int`.
    Int(i32),
    /// `long`.
    Long(i64),
    /// `float`.
    Float(f32),
    /// `double`.
    Double(f64),
    /// `bytes`.
    Bytes(Bytes),
    /// `string`.
    String(String),
    /// `fixed`.
    Fixed(Bytes),
    /// `enum` symbol.
    Enum(String),
    /// `array`.
    Array(Vec<Datum>),
    /// `map`.
    Map(BTreeMap<String, Datum>),
    /// `record`, fields in declared order.
    Record(RecordDatum),
    /// `uuid` logical value.
    Uuid(Uuid),
    /// `date` logical value.
    Date(NaiveDate),
    /// `time-millis` or `time-micros` logical value.
    Time(NaiveTime),
    /// `timestamp-millis` or `timestamp-micros` logical value.
    Timestamp(DateTime<Utc>),
}

impl Datum {
    /// Returns a short name for the kind of value held.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Bytes(_) => "bytes",
            Self::String(_) => "string",
            Self::Fixed(_) => "fixed",
            Self::Enum(_) => "enum",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Uuid(_) => "uuid",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Returns `true` for [`Datum::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the datum as JSON.
    ///
    /// Bytes and fixed values become strings with one code point per byte,
    /// logical values become ISO 8601 or hyphenated UUID strings, records
    /// become objects in field order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(value) => Value::Bool(*value),
            Self::Int(value) => Value::from(*value),
            Self::Long(value) => Value::from(*value),
            Self::Float(value) => float_json(f64::from(*value)),
            Self::Double(value) => float_json(*value),
            Self::Bytes(value) | Self::Fixed(value) => Value::String(latin1_encode(value)),
            Self::String(value) | Self::Enum(value) => Value::String(value.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Record(record) => {
                let mut object = Map::new();
                for (name, value) in record.iter() {
                    object.insert(name.to_string(), value.to_json());
                }
                Value::Object(object)
            }
            Self::Uuid(value) => Value::String(value.hyphenated().to_string()),
            Self::Date(value) => Value::String(value.to_string()),
            Self::Time(value) => Value::String(value.to_string()),
            Self::Timestamp(value) => {
                Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }

    /// Builds an untyped datum from JSON.
    ///
    /// Integers become `Long`, other numbers `Double` and objects `Map`;
    /// typed decoding narrows them further.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Boolean(*value),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Long)
                .or_else(|| number.as_f64().map(Self::Double))
                .unwrap_or(Self::Null),
            Value::String(value) => Self::String(value.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from_json(value)))
                    .collect(),
            ),
        }
    }
}

fn float_json(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Maps each byte to the code point of the same value.
#[must_use]
pub fn latin1_encode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Inverse of [`latin1_encode`]; strings with wider code points fall back to UTF-8.
#[must_use]
pub fn latin1_decode(text: &str) -> Vec<u8> {
    text.chars()
        .map(u8::try_from)
        .collect::<Result<Vec<u8>, _>>()
        .unwrap_or_else(|_| text.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_json_keeps_field_order() {
        let mut record = RecordDatum::new();
        record.insert("name", Datum::String("alice".into()));
        record.insert("age", Datum::Int(30));
        record.insert("tag", Datum::Null);
        assert_eq!(
            Datum::Record(record).to_json().to_string(),
            r#"{"name":"alice","age":30,"tag":null}"#
        );
    }

    #[test]
    fn test_from_json_is_untyped() {
        let value: Value =
            serde_json::from_str(r#"{"a": 1, "b": 1.5, "c": [true, null]}"#).expect("Failed to parse");
        let Datum::Map(entries) = Datum::from_json(&value) else {
            panic!("expected map");
        };
        assert_eq!(entries["a"], Datum::Long(1));
        assert_eq!(entries["b"], Datum::Double(1.5));
        assert_eq!(
            entries["c"],
            Datum::Array(vec![Datum::Boolean(true), Datum::Null])
        );
    }

    #[test]
    fn test_latin1() {
        let bytes = [0u8, 0x41, 0xe8, 0xff];
        assert_eq!(latin1_decode(&latin1_encode(&bytes)), bytes.to_vec());
        assert_eq!(latin1_decode("€"), "€".as_bytes().to_vec());
    }

    #[test]
    fn test_logical_json() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        assert_eq!(Datum::Date(date).to_json(), Value::from("2024-02-29"));
        let timestamp = DateTime::from_timestamp_millis(1_700_000_000_123).expect("valid timestamp");
        assert_eq!(
            Datum::Timestamp(timestamp).to_json(),
            Value::from("2023-11-14T22:13:20.123Z")
        );
    }
}

//! Record support.
//!
//! This module provides [`RecordDatum`], the ordered field store records
//! encode into, and the [`AvroRecord`] and [`RecordBuilder`] contracts
//! implemented by generated record types.

use super::convert::FromDatum;
use super::datum::Datum;
use super::error::{CoreError, Result};
use super::object::AvroObject;

/// Ordered key-value store of record fields.
///
/// Fields keep insertion order; inserting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDatum {
    fields: Vec<(String, Datum)>,
}

impl RecordDatum {
    /// Creates an empty record datum.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record datum with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: Datum) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Datum> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Removes and returns a field value.
    pub fn remove(&mut self, name: &str) -> Option<Datum> {
        let index = self.fields.iter().position(|(field, _)| field == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Iterates fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Datum)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Unpacks a record or map datum into a record datum.
    ///
    /// # Arguments
    /// * `datum` - Record datum, or map datum as produced by JSON decoding
    /// * `record` - Name of the target record type, used in errors
    ///
    /// # Errors
    /// Returns `CoreError::Value` for any other datum kind.
    pub fn from_datum(datum: Datum, record: &str) -> Result<Self> {
        match datum {
            Datum::Record(fields) => Ok(fields),
            Datum::Map(entries) => Ok(entries.into_iter().collect()),
            other => Err(CoreError::unexpected(record, "record", other.kind())),
        }
    }

    /// Removes a field and converts it to its typed value.
    ///
    /// An absent field is decoded from `null`, so optional fields may be
    /// omitted.
    ///
    /// # Errors
    /// Returns `CoreError::MissingField` if the field is absent and not
    /// optional, or the conversion error of the field type.
    pub fn take<T: FromDatum>(&mut self, record: &str, field: &str) -> Result<T> {
        match self.remove(field) {
            Some(value) => T::from_datum(value),
            None => Self::require(None, record, field),
        }
    }

    /// Resolves a builder slot; an unset slot is decoded from `null`.
    ///
    /// # Errors
    /// Returns `CoreError::MissingField` if the slot is unset and the field
    /// type does not accept `null`.
    pub fn require<T: FromDatum>(slot: Option<T>, record: &str, field: &str) -> Result<T> {
        match slot {
            Some(value) => Ok(value),
            None => T::from_datum(Datum::Null).map_err(|_| CoreError::missing_field(record, field)),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Datum)> for RecordDatum {
    fn from_iter<I: IntoIterator<Item = (K, Datum)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl IntoIterator for RecordDatum {
    type Item = (String, Datum);
    type IntoIter = std::vec::IntoIter<(String, Datum)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Contract of generated record types.
pub trait AvroRecord: AvroObject {
    /// Field names in declared order.
    const FIELDS: &'static [&'static str];
}

/// Contract of generated record builders.
///
/// Builders start empty, receive one chained call per field and produce the
/// record with [`RecordBuilder::build`].
pub trait RecordBuilder: Default {
    /// Record type produced by the builder.
    type Record: AvroRecord;

    /// Builds the record.
    ///
    /// # Errors
    /// Returns `CoreError::MissingField` naming the first unset field.
    fn build(self) -> Result<Self::Record>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut record = RecordDatum::new();
        record.insert("b", Datum::Int(1));
        record.insert("a", Datum::Int(2));
        record.insert("b", Datum::Int(3));
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(record.get("b"), Some(&Datum::Int(3)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_from_map_datum() {
        let mut entries = BTreeMap::new();
        entries.insert("x".to_string(), Datum::Long(5));
        let mut record =
            RecordDatum::from_datum(Datum::Map(entries), "Point").expect("Failed to unpack");
        let x: i32 = record.take("Point", "x").expect("Failed to take");
        assert_eq!(x, 5);
        assert!(record.is_empty());
    }

    #[test]
    fn test_take_absent_field() {
        let mut record = RecordDatum::new();
        let optional: Option<i32> = record.take("Point", "y").expect("Failed to take");
        assert_eq!(optional, None);
        let required: Result<String> = record.take("Point", "label");
        assert!(matches!(required, Err(CoreError::MissingField { .. })));
    }

    #[test]
    fn test_require_builder_slot() {
        let set: i32 = RecordDatum::require(Some(3), "Point", "x").expect("Failed to require");
        assert_eq!(set, 3);
        let unset: Option<i32> = RecordDatum::require(None, "Point", "y").expect("Failed to require");
        assert_eq!(unset, None);
        let missing: Result<i32> = RecordDatum::require(None, "Point", "x");
        assert!(matches!(missing, Err(CoreError::MissingField { .. })));
    }

    #[test]
    fn test_rejects_scalars() {
        assert!(RecordDatum::from_datum(Datum::Int(1), "Point").is_err());
    }
}

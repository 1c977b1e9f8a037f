//! Conversions between Rust values and [`Datum`].
//!
//! Every type a generated signature can name implements [`ToDatum`] and
//! [`FromDatum`]. Decoding is strict about kinds with two exceptions: integer
//! and float widths convert when the value fits, and the string forms
//! produced by JSON decoding are accepted for bytes and logical values.

use super::datum::{Datum, latin1_decode};
use super::error::{CoreError, Result};
use bytes::Bytes;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Days from 0001-01-01 to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Conversion into a [`Datum`].
pub trait ToDatum {
    /// Returns the datum representation of the value.
    fn to_datum(&self) -> Datum;
}

/// Conversion from a [`Datum`].
pub trait FromDatum: Sized {
    /// Builds a value from its datum representation.
    ///
    /// # Errors
    /// Returns `CoreError::Value` if the datum has the wrong shape.
    fn from_datum(datum: Datum) -> Result<Self>;
}

impl ToDatum for Datum {
    fn to_datum(&self) -> Datum {
        self.clone()
    }
}

impl FromDatum for Datum {
    fn from_datum(datum: Datum) -> Result<Self> {
        Ok(datum)
    }
}

impl ToDatum for () {
    fn to_datum(&self) -> Datum {
        Datum::Null
    }
}

impl FromDatum for () {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Null => Ok(()),
            other => Err(CoreError::unexpected("()", "null", other.kind())),
        }
    }
}

impl ToDatum for bool {
    fn to_datum(&self) -> Datum {
        Datum::Boolean(*self)
    }
}

impl FromDatum for bool {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Boolean(value) => Ok(value),
            other => Err(CoreError::unexpected("bool", "boolean", other.kind())),
        }
    }
}

impl ToDatum for i32 {
    fn to_datum(&self) -> Datum {
        Datum::Int(*self)
    }
}

impl FromDatum for i32 {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Int(value) => Ok(value),
            Datum::Long(value) => i32::try_from(value)
                .map_err(|_| CoreError::value("i32", format!("{} is out of range", value))),
            other => Err(CoreError::unexpected("i32", "int", other.kind())),
        }
    }
}

impl ToDatum for i64 {
    fn to_datum(&self) -> Datum {
        Datum::Long(*self)
    }
}

impl FromDatum for i64 {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Long(value) => Ok(value),
            Datum::Int(value) => Ok(i64::from(value)),
            other => Err(CoreError::unexpected("i64", "long", other.kind())),
        }
    }
}

impl ToDatum for f32 {
    fn to_datum(&self) -> Datum {
        Datum::Float(*self)
    }
}

impl FromDatum for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Float(value) => Ok(value),
            Datum::Double(value) => Ok(value as f32),
            other => Err(CoreError::unexpected("f32", "float", other.kind())),
        }
    }
}

impl ToDatum for f64 {
    fn to_datum(&self) -> Datum {
        Datum::Double(*self)
    }
}

impl FromDatum for f64 {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Double(value) => Ok(value),
            Datum::Float(value) => Ok(f64::from(value)),
            other => Err(CoreError::unexpected("f64", "double", other.kind())),
        }
    }
}

impl ToDatum for Bytes {
    fn to_datum(&self) -> Datum {
        Datum::Bytes(self.clone())
    }
}

impl FromDatum for Bytes {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Bytes(value) | Datum::Fixed(value) => Ok(value),
            Datum::String(text) => Ok(Bytes::from(latin1_decode(&text))),
            other => Err(CoreError::unexpected("Bytes", "bytes", other.kind())),
        }
    }
}

impl ToDatum for String {
    fn to_datum(&self) -> Datum {
        Datum::String(self.clone())
    }
}

impl FromDatum for String {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::String(value) => Ok(value),
            other => Err(CoreError::unexpected("String", "string", other.kind())),
        }
    }
}

impl ToDatum for Uuid {
    fn to_datum(&self) -> Datum {
        Datum::Uuid(*self)
    }
}

impl FromDatum for Uuid {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Uuid(value) => Ok(value),
            Datum::String(text) => {
                Uuid::parse_str(&text).map_err(|err| CoreError::value("Uuid", err.to_string()))
            }
            other => Err(CoreError::unexpected("Uuid", "uuid", other.kind())),
        }
    }
}

impl ToDatum for NaiveDate {
    fn to_datum(&self) -> Datum {
        Datum::Date(*self)
    }
}

impl FromDatum for NaiveDate {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Date(value) => Ok(value),
            Datum::Int(days) => date_from_epoch_days(days),
            Datum::String(text) => text
                .parse()
                .map_err(|err: chrono::ParseError| CoreError::value("NaiveDate", err.to_string())),
            other => Err(CoreError::unexpected("NaiveDate", "date", other.kind())),
        }
    }
}

impl ToDatum for NaiveTime {
    fn to_datum(&self) -> Datum {
        Datum::Time(*self)
    }
}

impl FromDatum for NaiveTime {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Time(value) => Ok(value),
            Datum::String(text) => text
                .parse()
                .map_err(|err: chrono::ParseError| CoreError::value("NaiveTime", err.to_string())),
            other => Err(CoreError::unexpected("NaiveTime", "time", other.kind())),
        }
    }
}

impl ToDatum for DateTime<Utc> {
    fn to_datum(&self) -> Datum {
        Datum::Timestamp(*self)
    }
}

impl FromDatum for DateTime<Utc> {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Timestamp(value) => Ok(value),
            Datum::String(text) => text.parse().map_err(|err: chrono::ParseError| {
                CoreError::value("DateTime<Utc>", err.to_string())
            }),
            other => Err(CoreError::unexpected("DateTime<Utc>", "timestamp", other.kind())),
        }
    }
}

impl<T: ToDatum> ToDatum for Option<T> {
    fn to_datum(&self) -> Datum {
        self.as_ref().map_or(Datum::Null, ToDatum::to_datum)
    }
}

impl<T: FromDatum> FromDatum for Option<T> {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Null => Ok(None),
            other => T::from_datum(other).map(Some),
        }
    }
}

impl<T: ToDatum> ToDatum for Box<T> {
    fn to_datum(&self) -> Datum {
        self.as_ref().to_datum()
    }
}

impl<T: FromDatum> FromDatum for Box<T> {
    fn from_datum(datum: Datum) -> Result<Self> {
        T::from_datum(datum).map(Box::new)
    }
}

impl<T: ToDatum> ToDatum for Vec<T> {
    fn to_datum(&self) -> Datum {
        Datum::Array(self.iter().map(ToDatum::to_datum).collect())
    }
}

impl<T: FromDatum> FromDatum for Vec<T> {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Array(items) => items.into_iter().map(T::from_datum).collect(),
            other => Err(CoreError::unexpected("Vec", "array", other.kind())),
        }
    }
}

impl<T: ToDatum> ToDatum for HashMap<String, T> {
    fn to_datum(&self) -> Datum {
        Datum::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_datum()))
                .collect(),
        )
    }
}

impl<T: FromDatum> FromDatum for HashMap<String, T> {
    fn from_datum(datum: Datum) -> Result<Self> {
        match datum {
            Datum::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| T::from_datum(value).map(|value| (key, value)))
                .collect(),
            other => Err(CoreError::unexpected("HashMap", "map", other.kind())),
        }
    }
}

/// Converts a day count since 1970-01-01 into a date.
///
/// # Errors
/// Returns `CoreError::Value` if the day count is out of range.
pub fn date_from_epoch_days(days: i32) -> Result<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| CoreError::value("NaiveDate", format!("{} days is out of range", days)))
}

/// Converts a date into its day count since 1970-01-01.
#[must_use]
pub fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths() {
        assert_eq!(i32::from_datum(Datum::Long(7)).expect("Failed to decode"), 7);
        assert!(i32::from_datum(Datum::Long(i64::MAX)).is_err());
        assert_eq!(i64::from_datum(Datum::Int(-3)).expect("Failed to decode"), -3);
    }

    #[test]
    fn test_no_int_to_float_promotion() {
        assert!(f64::from_datum(Datum::Int(1)).is_err());
        assert!(f32::from_datum(Datum::Long(1)).is_err());
        assert_eq!(f32::from_datum(Datum::Double(0.5)).expect("Failed to decode"), 0.5);
    }

    #[test]
    fn test_option() {
        assert_eq!(Option::<String>::from_datum(Datum::Null).expect("Failed to decode"), None);
        assert_eq!(Some(3i32).to_datum(), Datum::Int(3));
        assert_eq!(None::<i32>.to_datum(), Datum::Null);
    }

    #[test]
    fn test_containers() {
        let values = vec![1i64, 2, 3];
        assert_eq!(
            Vec::<i64>::from_datum(values.to_datum()).expect("Failed to decode"),
            values
        );
        let mut map = HashMap::new();
        map.insert("k".to_string(), true);
        assert_eq!(
            HashMap::<String, bool>::from_datum(map.to_datum()).expect("Failed to decode"),
            map
        );
        assert!(Vec::<i64>::from_datum(Datum::Null).is_err());
    }

    #[test]
    fn test_epoch_days() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date");
        assert_eq!(date_to_epoch_days(epoch), 0);
        let before = date_from_epoch_days(-1).expect("Failed to convert");
        assert_eq!(before, NaiveDate::from_ymd_opt(1969, 12, 31).expect("valid date"));
        assert_eq!(
            NaiveDate::from_datum(Datum::String("2024-02-29".into())).expect("Failed to decode"),
            NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date")
        );
    }

    #[test]
    fn test_logical_strings() {
        let uuid = Uuid::from_u128(0x1234);
        assert_eq!(
            Uuid::from_datum(Datum::String(uuid.to_string())).expect("Failed to decode"),
            uuid
        );
        assert!(Uuid::from_datum(Datum::String("nope".into())).is_err());
    }
}

//! Base contract of every generated named type.

use super::convert::{FromDatum, ToDatum};
use super::datum::Datum;
use super::driver::DriverProxy;
use super::error::Result;
use serde_json::Value;
use std::io::{Read, Write};

/// Trait implemented by every generated record, enum and fixed type.
///
/// Implementations only provide the two schema constants and the datum
/// conversions; encoding, JSON and stream IO are provided.
///
/// # Example
/// ```ignore
/// let user = User::new("alice".into(), Some(10), None);
/// let datum = user.encode();
/// assert_eq!(User::decode(datum)?, user);
/// ```
pub trait AvroObject: ToDatum + FromDatum {
    /// Parsing Canonical Form of the schema.
    const CANONICAL_SCHEMA: &'static str;

    /// Raw schema JSON including logical types and documentation.
    const SCHEMA: &'static str;

    /// Encodes the object into a datum shaped like the canonical schema.
    fn encode(&self) -> Datum {
        self.to_datum()
    }

    /// Decodes an object from a datum.
    ///
    /// # Errors
    /// Returns `CoreError` if the datum does not match the type.
    fn decode(datum: Datum) -> Result<Self> {
        Self::from_datum(datum)
    }

    /// Encodes the object as a JSON document.
    ///
    /// # Errors
    /// Returns `CoreError::Json` if serialization fails.
    fn encode_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.encode().to_json())?)
    }

    /// Decodes an object from a JSON document.
    ///
    /// # Errors
    /// Returns `CoreError` if the JSON is malformed or does not match the type.
    fn decode_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::decode(Datum::from_json(&value))
    }

    /// Parses the raw schema constant.
    ///
    /// # Errors
    /// Returns `CoreError::Json` if the constant is not valid JSON.
    fn schema_json() -> Result<Value> {
        Ok(serde_json::from_str(Self::SCHEMA)?)
    }

    /// Writes the object through the proxy's driver.
    ///
    /// # Errors
    /// Returns `CoreError::DriverUnloaded` if no driver is loaded, or the
    /// driver's encoding error.
    fn write<W: Write>(&self, proxy: &DriverProxy, writer: &mut W) -> Result<()> {
        proxy.write(self, writer)
    }

    /// Reads an object through the proxy's driver.
    ///
    /// # Errors
    /// Returns `CoreError::DriverUnloaded` if no driver is loaded, or the
    /// driver's decoding error.
    fn read<R: Read>(proxy: &DriverProxy, reader: &mut R) -> Result<Self> {
        proxy.read(reader)
    }
}

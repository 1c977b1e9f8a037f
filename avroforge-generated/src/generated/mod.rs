pub use ::avroforge_core;

/// Driver loaded by default when reading or writing generated types.
pub const DEFAULT_DRIVER: &str = "apache_avro_binary_driver";

pub mod com;
pub mod org;
pub mod q;

use bytes::Bytes;
use self::avroforge_core::{AvroObject, AvroRecord, CoreError, Datum, FromDatum, RecordBuilder, RecordDatum, ToDatum};
use std::collections::HashMap;

/// `Envelope` record.
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    payload: Bytes,
    headers: HashMap<String, String>,
}

#[allow(non_snake_case, clippy::too_many_arguments)]
impl Envelope {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(payload: Bytes, headers: HashMap<String, String>) -> Self {
        Self {
            payload,
            headers,
        }
    }

    /// Returns `payload`.
    #[must_use]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Sets `payload`.
    pub fn set_payload(&mut self, value: Bytes) {
        self.payload = value;
    }

    /// Returns `headers`.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Sets `headers`.
    pub fn set_headers(&mut self, value: HashMap<String, String>) {
        self.headers = value;
    }
}

impl AvroObject for Envelope {
    const CANONICAL_SCHEMA: &'static str = r#"{"name":"Envelope","type":"record","fields":[{"name":"payload","type":"bytes"},{"name":"headers","type":{"type":"map","values":"string"}}]}"#;
    const SCHEMA: &'static str = r#"{"type":"record","name":"Envelope","fields":[{"name":"payload","type":"bytes"},{"name":"headers","type":{"type":"map","values":"string"}}]}"#;
}

impl AvroRecord for Envelope {
    const FIELDS: &'static [&'static str] = &["payload", "headers"];
}

impl ToDatum for Envelope {
    fn to_datum(&self) -> Datum {
        let mut record = RecordDatum::with_capacity(2);
        record.insert("payload", self.payload.to_datum());
        record.insert("headers", self.headers.to_datum());
        Datum::Record(record)
    }
}

impl FromDatum for Envelope {
    fn from_datum(datum: Datum) -> Result<Self, CoreError> {
        let mut fields = RecordDatum::from_datum(datum, "Envelope")?;
        Ok(Self::new(
            fields.take("Envelope", "payload")?,
            fields.take("Envelope", "headers")?,
        ))
    }
}

/// Builder for [`Envelope`].
#[allow(non_camel_case_types, non_snake_case)]
#[derive(Debug, Clone, Default)]
pub struct EnvelopeBuilder {
    payload: Option<Bytes>,
    headers: Option<HashMap<String, String>>,
}

#[allow(non_snake_case)]
impl EnvelopeBuilder {
    /// Sets `payload`.
    #[must_use]
    pub fn payload(mut self, value: Bytes) -> Self {
        self.payload = Some(value);
        self
    }

    /// Sets `headers`.
    #[must_use]
    pub fn headers(mut self, value: HashMap<String, String>) -> Self {
        self.headers = Some(value);
        self
    }
}

impl RecordBuilder for EnvelopeBuilder {
    type Record = Envelope;

    fn build(self) -> Result<Envelope, CoreError> {
        Ok(Envelope::new(
            RecordDatum::require(self.payload, "Envelope", "payload")?,
            RecordDatum::require(self.headers, "Envelope", "headers")?,
        ))
    }
}

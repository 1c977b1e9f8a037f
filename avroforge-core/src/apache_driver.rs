//! Binary driver backed by the `apache-avro` crate.

use super::datum::Datum;
use super::driver::AvroDriver;
use super::error::Result;
use super::schema_walk::SchemaWalker;
use apache_avro::Schema;
use std::io::{Read, Write};

/// Avro binary datum encoding without container framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApacheAvroBinaryDriver;

impl ApacheAvroBinaryDriver {
    /// Creates the driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AvroDriver for ApacheAvroBinaryDriver {
    fn read(&self, canonical_schema: &str, schema: &str, reader: &mut dyn Read) -> Result<Datum> {
        let codec_schema = Schema::parse_str(canonical_schema)?;
        let mut reader = reader;
        let value = apache_avro::from_avro_datum(&codec_schema, &mut reader, None)?;
        SchemaWalker::new(schema)?.raise(value)
    }

    fn write(
        &self,
        canonical_schema: &str,
        schema: &str,
        datum: &Datum,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let codec_schema = Schema::parse_str(canonical_schema)?;
        let value = SchemaWalker::new(schema)?.lower(datum)?;
        let encoded = apache_avro::to_avro_datum(&codec_schema, value)?;
        tracing::trace!("encoded {} bytes", encoded.len());
        writer.write_all(&encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::record::RecordDatum;

    const CANONICAL: &str = r#"{"name":"com.acme.User","type":"record","fields":[{"name":"name","type":"string"},{"name":"favorite_number","type":["int","null"]}]}"#;

    #[test]
    fn test_binary_round_trip() {
        let mut record = RecordDatum::new();
        record.insert("name", Datum::String("alice".into()));
        record.insert("favorite_number", Datum::Int(10));
        let datum = Datum::Record(record);

        let driver = ApacheAvroBinaryDriver::new();
        let mut buffer = Vec::new();
        driver
            .write(CANONICAL, CANONICAL, &datum, &mut buffer)
            .expect("Failed to write");
        assert_eq!(buffer[0], 10);
        let decoded = driver
            .read(CANONICAL, CANONICAL, &mut buffer.as_slice())
            .expect("Failed to read");
        assert_eq!(decoded, datum);
    }

    #[test]
    fn test_write_rejects_mismatched_datum() {
        let driver = ApacheAvroBinaryDriver::new();
        let mut buffer = Vec::new();
        assert!(driver
            .write(CANONICAL, CANONICAL, &Datum::Int(1), &mut buffer)
            .is_err());
        assert!(buffer.is_empty());
    }
}

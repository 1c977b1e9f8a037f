//! JSON driver writing one document per datum.

use super::datum::Datum;
use super::driver::AvroDriver;
use super::error::{CoreError, Result};
use serde_json::Value;
use std::io::{self, Read, Write};

/// Newline-delimited JSON encoding of datums.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDriver;

impl JsonDriver {
    /// Creates the driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AvroDriver for JsonDriver {
    fn read(&self, _canonical_schema: &str, _schema: &str, reader: &mut dyn Read) -> Result<Datum> {
        let mut documents = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();
        match documents.next() {
            Some(value) => Ok(Datum::from_json(&value?)),
            None => Err(CoreError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no JSON document in stream",
            ))),
        }
    }

    fn write(
        &self,
        _canonical_schema: &str,
        _schema: &str,
        datum: &Datum,
        writer: &mut dyn Write,
    ) -> Result<()> {
        serde_json::to_writer(&mut *writer, &datum.to_json())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_document_per_line() {
        let driver = JsonDriver::new();
        let mut buffer = Vec::new();
        driver
            .write("", "", &Datum::Long(1), &mut buffer)
            .expect("Failed to write");
        driver
            .write("", "", &Datum::String("x".into()), &mut buffer)
            .expect("Failed to write");
        assert_eq!(buffer, b"1\n\"x\"\n");
        let datum = driver
            .read("", "", &mut buffer.as_slice())
            .expect("Failed to read");
        assert_eq!(datum, Datum::Long(1));
    }

    #[test]
    fn test_empty_stream() {
        let driver = JsonDriver::new();
        assert!(matches!(
            driver.read("", "", &mut io::empty()),
            Err(CoreError::Io(_))
        ));
    }
}

//! Fixed-size byte types.

use super::datum::{Datum, latin1_decode};
use super::error::{CoreError, Result};
use super::object::AvroObject;
use bytes::Bytes;

/// Byte storage of a fixed value, bounded by the declared size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes(Bytes);

impl FixedBytes {
    /// Creates storage holding at most `size` leading bytes of `data`.
    #[must_use]
    pub fn new(data: &[u8], size: usize) -> Self {
        let len = data.len().min(size);
        Self(Bytes::copy_from_slice(&data[..len]))
    }

    /// Creates storage of `size` zero bytes.
    #[must_use]
    pub fn zeroed(size: usize) -> Self {
        Self(Bytes::from(vec![0; size]))
    }

    /// Returns the stored bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns a cheap clone of the stored bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Number of stored bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replaces the stored bytes, truncating to `size`.
    pub fn set(&mut self, data: &[u8], size: usize) {
        *self = Self::new(data, size);
    }
}

/// Contract of generated fixed types.
///
/// Generated types are newtypes over [`FixedBytes`] and only provide the
/// storage accessors; construction and byte access are provided.
pub trait AvroFixed: AvroObject {
    /// Declared size in bytes.
    const SIZE: usize;

    /// Wraps storage that already respects [`AvroFixed::SIZE`].
    fn from_storage(storage: FixedBytes) -> Self;

    /// Returns the storage.
    fn storage(&self) -> &FixedBytes;

    /// Returns the storage mutably.
    fn storage_mut(&mut self) -> &mut FixedBytes;

    /// Creates a value from the leading [`AvroFixed::SIZE`] bytes of `data`.
    #[must_use]
    fn from_slice(data: &[u8]) -> Self {
        Self::from_storage(FixedBytes::new(data, Self::SIZE))
    }

    /// Creates a value of [`AvroFixed::SIZE`] zero bytes.
    #[must_use]
    fn zeroed() -> Self {
        Self::from_storage(FixedBytes::zeroed(Self::SIZE))
    }

    /// Returns the stored bytes.
    fn as_bytes(&self) -> &[u8] {
        self.storage().as_slice()
    }

    /// Replaces the stored bytes, truncating to [`AvroFixed::SIZE`].
    fn set_bytes(&mut self, data: &[u8]) {
        self.storage_mut().set(data, Self::SIZE);
    }

    /// Encodes the value as a fixed datum.
    fn to_fixed_datum(&self) -> Datum {
        fixed_to_datum(self)
    }

    /// Decodes a value from a fixed, bytes or string datum.
    ///
    /// # Errors
    /// Returns `CoreError::Value` for any other datum kind.
    fn from_fixed_datum(datum: Datum) -> Result<Self> {
        fixed_from_datum(datum)
    }
}

/// Encodes a fixed value.
#[must_use]
pub fn fixed_to_datum<F: AvroFixed>(value: &F) -> Datum {
    Datum::Fixed(value.storage().to_bytes())
}

/// Decodes a fixed value from a fixed, bytes or string datum.
///
/// # Errors
/// Returns `CoreError::Value` for any other datum kind.
pub fn fixed_from_datum<F: AvroFixed>(datum: Datum) -> Result<F> {
    match datum {
        Datum::Fixed(data) | Datum::Bytes(data) => Ok(F::from_slice(&data)),
        Datum::String(text) => Ok(F::from_slice(&latin1_decode(&text))),
        other => Err(CoreError::unexpected(
            std::any::type_name::<F>(),
            "fixed",
            other.kind(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_size() {
        let storage = FixedBytes::new(b"01234567890123456789", 16);
        assert_eq!(storage.as_slice(), b"0123456789012345");
        let short = FixedBytes::new(b"0", 16);
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn test_zeroed() {
        let storage = FixedBytes::zeroed(8);
        assert_eq!(storage.as_slice(), &[0; 8]);
        assert!(FixedBytes::zeroed(0).is_empty());
    }

    #[test]
    fn test_set_replaces() {
        let mut storage = FixedBytes::new(b"abcd", 4);
        storage.set(b"xyz12", 4);
        assert_eq!(storage.as_slice(), b"xyz1");
        assert!(!storage.is_empty());
    }
}

//! Fixed-size decimals.
//!
//! A fixed decimal stores its unscaled value as a big-endian two's complement
//! integer filling the whole fixed size. [`Decimal`] is the arithmetic-free
//! exchange type between that storage and callers.

use super::error::{CoreError, Result};
use super::fixed::AvroFixed;
use std::fmt;
use std::str::FromStr;

/// Exact decimal value `unscaled * 10^-scale`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Decimal {
    /// Unscaled integer value.
    pub unscaled: i128,
    /// Number of digits after the decimal point.
    pub scale: u32,
}

impl Decimal {
    /// Creates a decimal.
    #[must_use]
    pub const fn new(unscaled: i128, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Converts to another scale, rounding half away from zero when digits
    /// are dropped.
    ///
    /// Returns `None` if the result does not fit an `i128`.
    #[must_use]
    pub fn rescale(&self, scale: u32) -> Option<Self> {
        if scale >= self.scale {
            let factor = 10i128.checked_pow(scale - self.scale)?;
            let unscaled = self.unscaled.checked_mul(factor)?;
            return Some(Self::new(unscaled, scale));
        }
        let divisor = 10i128.checked_pow(self.scale - scale)?;
        let mut unscaled = self.unscaled / divisor;
        let remainder = self.unscaled % divisor;
        if remainder.unsigned_abs() * 2 >= divisor.unsigned_abs() {
            unscaled += self.unscaled.signum();
        }
        Some(Self::new(unscaled, scale))
    }

    /// Number of significant decimal digits of the unscaled value.
    #[must_use]
    pub fn digits(&self) -> u32 {
        let mut value = self.unscaled.unsigned_abs();
        let mut digits = 0;
        while value > 0 {
            value /= 10;
            digits += 1;
        }
        digits
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(i128::from(value), 0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let digits = self.unscaled.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, integer, fraction)
    }
}

impl FromStr for Decimal {
    type Err = CoreError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || CoreError::value("Decimal", format!("'{}' is not a decimal", text));
        let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let unscaled = format!("{}{}", integer, fraction)
            .parse::<i128>()
            .map_err(|_| invalid())?;
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        Ok(Self::new(unscaled, scale))
    }
}

/// Contract of generated fixed decimal types.
pub trait AvroFixedDecimal: AvroFixed {
    /// Maximum number of significant digits.
    const PRECISION: u32;

    /// Digits after the decimal point.
    const SCALE: u32 = 0;

    /// Reads the stored value.
    ///
    /// Storage shorter than [`AvroFixed::SIZE`] is read as it is; empty
    /// storage reads as zero.
    fn as_decimal(&self) -> Decimal {
        Decimal::new(read_twos_complement(self.as_bytes()), Self::SCALE)
    }

    /// Stores a value, rescaled to [`AvroFixedDecimal::SCALE`].
    ///
    /// # Errors
    /// Returns `CoreError::DecimalOverflow` if the value has more digits than
    /// the precision allows or does not fit the fixed size.
    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        let overflow = || CoreError::DecimalOverflow {
            value: value.to_string(),
            size: Self::SIZE,
            precision: Self::PRECISION,
        };
        let scaled = value.rescale(Self::SCALE).ok_or_else(overflow)?;
        if scaled.digits() > Self::PRECISION {
            return Err(overflow());
        }
        let bytes = write_twos_complement(scaled.unscaled, Self::SIZE).ok_or_else(overflow)?;
        self.set_bytes(&bytes);
        Ok(())
    }

    /// Creates a value from a decimal.
    ///
    /// # Errors
    /// Returns `CoreError::DecimalOverflow` if the value does not fit.
    fn from_decimal(value: Decimal) -> Result<Self> {
        let mut fixed = Self::from_slice(&[]);
        fixed.set_decimal(value)?;
        Ok(fixed)
    }
}

/// Reads a big-endian two's complement integer.
///
/// Only the trailing 16 bytes contribute; the leading byte gives the sign.
#[must_use]
pub fn read_twos_complement(bytes: &[u8]) -> i128 {
    let Some(first) = bytes.first() else {
        return 0;
    };
    let fill = if first & 0x80 == 0 { 0x00 } else { 0xff };
    let mut buffer = [fill; 16];
    let tail = &bytes[bytes.len().saturating_sub(16)..];
    buffer[16 - tail.len()..].copy_from_slice(tail);
    i128::from_be_bytes(buffer)
}

/// Writes `value` as a big-endian two's complement integer of `size` bytes.
///
/// Returns `None` if the value does not fit.
#[must_use]
pub fn write_twos_complement(value: i128, size: usize) -> Option<Vec<u8>> {
    let bytes = value.to_be_bytes();
    let fill = if value < 0 { 0xff } else { 0x00 };
    if size >= bytes.len() {
        let mut out = vec![fill; size - bytes.len()];
        out.extend_from_slice(&bytes);
        return Some(out);
    }
    let (dropped, kept) = bytes.split_at(bytes.len() - size);
    let sign_preserved = kept.first().is_none_or(|byte| (byte & 0x80 != 0) == (value < 0));
    if dropped.iter().all(|byte| *byte == fill) && sign_preserved && size > 0 {
        Some(kept.to_vec())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Decimal::new(1000, 2).to_string(), "10.00");
        assert_eq!(Decimal::new(-5, 2).to_string(), "-0.05");
        assert_eq!(Decimal::new(42, 0).to_string(), "42");
        assert_eq!("-12.34".parse::<Decimal>().expect("Failed to parse"), Decimal::new(-1234, 2));
        assert!("1.2.3".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_rescale() {
        assert_eq!(Decimal::from(10).rescale(2), Some(Decimal::new(1000, 2)));
        assert_eq!(Decimal::new(1235, 3).rescale(2), Some(Decimal::new(124, 2)));
        assert_eq!(Decimal::new(-1235, 3).rescale(2), Some(Decimal::new(-124, 2)));
        assert_eq!(Decimal::new(1234, 3).rescale(2), Some(Decimal::new(123, 2)));
    }

    #[test]
    fn test_twos_complement() {
        let bytes = write_twos_complement(1000, 16).expect("fits");
        assert_eq!(&bytes[14..], &[0x03, 0xe8]);
        assert!(bytes[..14].iter().all(|byte| *byte == 0));
        assert_eq!(read_twos_complement(&bytes), 1000);

        let negative = write_twos_complement(-1, 4).expect("fits");
        assert_eq!(negative, vec![0xff; 4]);
        assert_eq!(read_twos_complement(&negative), -1);

        assert_eq!(write_twos_complement(128, 1), None);
        assert_eq!(write_twos_complement(-128, 1), Some(vec![0x80]));
        assert_eq!(read_twos_complement(&[]), 0);
    }
}

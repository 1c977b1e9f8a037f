//! Enum support.
//!
//! Generated enums are plain Rust enums with one unit variant per symbol.
//! The [`AvroEnum`] lookup tables are emitted alongside them, so symbol and
//! index lookups are slice operations.

use super::datum::Datum;
use super::error::{CoreError, Result};
use super::object::AvroObject;

/// Contract of generated enum types.
///
/// Variant order is symbol order, so the derived `Ord` ranks values by
/// symbol position.
pub trait AvroEnum: AvroObject + Copy + Ord + 'static {
    /// Symbols in declared order.
    const SYMBOLS: &'static [&'static str];

    /// Values in declared order; `VALUES[i]` has symbol `SYMBOLS[i]`.
    const VALUES: &'static [Self];

    /// Position of the value in the symbol list.
    fn index(self) -> usize;

    /// Symbol of the value.
    fn symbol(self) -> &'static str {
        Self::SYMBOLS[self.index()]
    }

    /// Looks up a value by position.
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::VALUES.get(index).copied()
    }

    /// Looks up a value by symbol.
    ///
    /// # Errors
    /// Returns `CoreError::UnknownSymbol` if the symbol is not declared.
    fn from_symbol(symbol: &str) -> Result<Self> {
        Self::SYMBOLS
            .iter()
            .position(|candidate| *candidate == symbol)
            .and_then(Self::from_index)
            .ok_or_else(|| CoreError::UnknownSymbol {
                enum_name: std::any::type_name::<Self>().to_string(),
                symbol: symbol.to_string(),
            })
    }

    /// Iterates values in symbol order; reverse with `.rev()`.
    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::VALUES.iter().copied()
    }

    /// Number of symbols.
    #[must_use]
    fn len() -> usize {
        Self::SYMBOLS.len()
    }

    /// Encodes the value as its symbol.
    fn to_symbol_datum(self) -> Datum {
        enum_to_datum(self)
    }

    /// Decodes a value from an enum or string datum.
    ///
    /// # Errors
    /// Returns `CoreError::Value` if the datum is not a declared symbol.
    fn from_symbol_datum(datum: Datum) -> Result<Self> {
        enum_from_datum(datum)
    }
}

/// Encodes an enum value as its symbol.
#[must_use]
pub fn enum_to_datum<E: AvroEnum>(value: E) -> Datum {
    Datum::Enum(value.symbol().to_string())
}

/// Decodes an enum value from an enum or string datum.
///
/// # Errors
/// Returns `CoreError::Value` if the datum is not a symbol of `E`.
pub fn enum_from_datum<E: AvroEnum>(datum: Datum) -> Result<E> {
    let target = std::any::type_name::<E>();
    match datum {
        Datum::Enum(symbol) | Datum::String(symbol) => {
            E::from_symbol(&symbol).map_err(|err| CoreError::value(target, err.to_string()))
        }
        other => Err(CoreError::unexpected(target, "enum", other.kind())),
    }
}

//! Schema validation utilities.
//!
//! Name, symbol and structural checks applied while parsing.

use crate::error::ParseError;
use crate::types::Schema;
use std::collections::HashSet;

/// Checks a single Avro name segment against `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Validates a possibly dotted type name.
///
/// # Errors
/// Returns `ParseError::InvalidName` if any segment is not a valid identifier.
pub fn validate_name(kind: &str, name: &str) -> Result<(), ParseError> {
    if name.split('.').all(is_valid_identifier) {
        Ok(())
    } else {
        Err(ParseError::invalid_name(kind, name))
    }
}

/// Validates a namespace; the empty namespace is allowed.
///
/// # Errors
/// Returns `ParseError::InvalidName` if any segment is not a valid identifier.
pub fn validate_namespace(namespace: &str) -> Result<(), ParseError> {
    if namespace.is_empty() {
        return Ok(());
    }
    validate_name("namespace", namespace)
}

/// Validates enum symbols: identifiers, no duplicates.
///
/// # Errors
/// Returns `ParseError` on the first invalid or repeated symbol.
pub fn validate_symbols(symbols: &[String]) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for symbol in symbols {
        if !is_valid_identifier(symbol) {
            return Err(ParseError::invalid_name("symbol", symbol));
        }
        if !seen.insert(symbol.as_str()) {
            return Err(ParseError::duplicate("symbol", symbol));
        }
    }
    Ok(())
}

/// Validates union alternatives.
///
/// Unions may not directly contain unions, and may not contain more than one
/// unnamed alternative of the same type.
///
/// # Errors
/// Returns `ParseError::InvalidAttribute` describing the offending alternative.
pub fn validate_union(schemas: &[Schema]) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for schema in schemas {
        let key = match schema {
            Schema::Union(_) => {
                return Err(ParseError::invalid_attr("union", "type", "union"));
            }
            Schema::Record(_)
            | Schema::Enum(_)
            | Schema::Fixed(_)
            | Schema::FixedDecimal(_) => schema.name().map(|name| name.fullname()),
            Schema::Reference(reference) => Some(reference.name.fullname()),
            _ => Some(schema.type_name().to_string()),
        };
        if let Some(key) = key {
            if !seen.insert(key.clone()) {
                return Err(ParseError::duplicate("union alternative", key));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;

    #[test]
    fn test_identifiers() {
        assert!(is_valid_identifier("favorite_number"));
        assert!(is_valid_identifier("_x1"));
        assert!(!is_valid_identifier("1x"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("a-b"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("type", "com.acme.User").is_ok());
        assert!(validate_name("type", "com..User").is_err());
        assert!(validate_namespace("").is_ok());
    }

    #[test]
    fn test_validate_symbols_duplicate() {
        let symbols = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        assert!(matches!(
            validate_symbols(&symbols),
            Err(ParseError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_validate_union() {
        let null = Schema::primitive(PrimitiveType::Null);
        let nested = Schema::union(vec![null.clone()]);
        assert!(validate_union(&[null.clone(), nested]).is_err());
        assert!(validate_union(&[null.clone(), null]).is_err());
    }
}

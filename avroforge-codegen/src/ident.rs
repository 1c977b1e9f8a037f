//! Rust identifiers for Avro names.

use avroforge_core::union::MAX_UNION_BRANCHES;

/// Identifiers `syn` still accepts that are reserved in edition 2024.
const EDITION_RESERVED: &[&str] = &["gen"];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Associated items of generated types that a field accessor must not shadow.
const RESERVED_METHODS: &[&str] = &["new", "build", "default"];

/// Type and constructor names generated units use unqualified.
const RESERVED_TYPES: &[&str] = &[
    // primitives
    "bool", "f32", "f64", "i32", "i64", "str", "u32", "usize",
    // prelude
    "Box", "Default", "Err", "None", "Ok", "Option", "Result", "Some", "String", "Vec",
    // std and third-party imports
    "Bytes", "DateTime", "HashMap", "NaiveDate", "NaiveTime", "Utc", "Uuid",
    // runtime
    "AvroEnum", "AvroFixed", "AvroFixedDecimal", "AvroObject", "AvroRecord", "CoreError",
    "Datum", "FixedBytes", "FromDatum", "RecordBuilder", "RecordDatum", "ToDatum",
];

/// Suffix of generated record builders.
pub const BUILDER_SUFFIX: &str = "Builder";

/// Converts an Avro name into a usable Rust identifier.
///
/// Keywords are escaped as raw identifiers (`r#type`); keywords that cannot
/// be raw get a trailing underscore (`self_`), as does a lone `_`.
///
/// # Arguments
/// * `name` - Avro name matching `[A-Za-z_][A-Za-z0-9_]*`
#[must_use]
pub fn escape_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) || name == "_" {
        return format!("{}_", name);
    }
    if EDITION_RESERVED.contains(&name) || syn::parse_str::<syn::Ident>(name).is_err() {
        return format!("r#{}", name);
    }
    name.to_string()
}

/// Returns `true` if a declared type named `name` would shadow a name the
/// generated code relies on.
///
/// Covers [`RESERVED_TYPES`], the runtime union types and names ending in
/// [`BUILDER_SUFFIX`], which could clash with a sibling record's builder.
#[must_use]
pub fn is_reserved_type(name: &str) -> bool {
    RESERVED_TYPES.contains(&name)
        || name.ends_with(BUILDER_SUFFIX)
        || name
            .strip_prefix("Union")
            .and_then(|arity| arity.parse::<usize>().ok())
            .is_some_and(|arity| (2..=MAX_UNION_BRANCHES).contains(&arity))
}

/// Converts an Avro type name into the Rust identifier of its declaration.
///
/// Like [`escape_ident`], with a trailing underscore for reserved names
/// (`Result` becomes `Result_`).
#[must_use]
pub fn type_ident(name: &str) -> String {
    if is_reserved_type(name) {
        format!("{}_", name)
    } else {
        escape_ident(name)
    }
}

/// Strips the raw identifier prefix.
#[must_use]
pub fn bare_ident(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Method name for a field's getter and builder setter.
#[must_use]
pub fn method_ident(field: &str) -> String {
    let ident = escape_ident(field);
    if RESERVED_METHODS.contains(&bare_ident(&ident)) {
        format!("{}_", bare_ident(&ident))
    } else {
        ident
    }
}

/// Mutator name for a field.
#[must_use]
pub fn setter_ident(field: &str) -> String {
    format!("set_{}", bare_ident(&escape_ident(field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(escape_ident("favorite_number"), "favorite_number");
        assert_eq!(escape_ident("User"), "User");
    }

    #[test]
    fn test_keywords_escaped() {
        assert_eq!(escape_ident("type"), "r#type");
        assert_eq!(escape_ident("match"), "r#match");
        assert_eq!(escape_ident("gen"), "r#gen");
        assert_eq!(escape_ident("self"), "self_");
        assert_eq!(escape_ident("Self"), "Self_");
        assert_eq!(escape_ident("_"), "__");
    }

    #[test]
    fn test_reserved_type_names() {
        assert_eq!(type_ident("User"), "User");
        assert_eq!(type_ident("match"), "r#match");
        assert_eq!(type_ident("Result"), "Result_");
        assert_eq!(type_ident("Datum"), "Datum_");
        assert_eq!(type_ident("i32"), "i32_");
        assert_eq!(type_ident("Union3"), "Union3_");
        assert_eq!(type_ident("Union9"), "Union9");
        assert_eq!(type_ident("UserBuilder"), "UserBuilder_");
        assert_eq!(type_ident("Ok"), "Ok_");
        assert!(!is_reserved_type("Resulting"));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(method_ident("type"), "r#type");
        assert_eq!(method_ident("new"), "new_");
        assert_eq!(method_ident("build"), "build_");
        assert_eq!(setter_ident("type"), "set_type");
        assert_eq!(setter_ident("self"), "set_self_");
    }
}

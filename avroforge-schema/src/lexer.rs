//! Schema file discovery and loading.
//!
//! A source path is either a single schema file or a directory that is
//! searched recursively for `*.avsc` files, read in path order.

use crate::error::{SchemaError, json_kind};
use crate::parser::SchemaParser;
use crate::types::Schema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of Avro schema files.
pub const SCHEMA_EXTENSION: &str = "avsc";

/// Reads every schema under a path.
///
/// # Arguments
/// * `path` - A schema file or a directory of `*.avsc` files
///
/// # Returns
/// Parsed schemas in file order.
///
/// # Errors
/// Returns `SchemaError::Io` if the path cannot be read,
/// `SchemaError::UnsupportedRoot` if a document is not a JSON object, or
/// `SchemaError::Parse` if a document is not a valid schema.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<Schema>, SchemaError> {
    let path = path.as_ref();
    let files = if path.is_dir() {
        schema_files(path)?
    } else {
        vec![path.to_path_buf()]
    };
    tracing::info!("reading {} schema file(s) from {}", files.len(), path.display());
    files.iter().map(read_schema_file).collect()
}

/// Lists the `*.avsc` files anywhere below a directory, sorted by path.
///
/// # Errors
/// Returns `SchemaError::Io` if a directory in the tree cannot be listed.
pub fn schema_files(directory: &Path) -> Result<Vec<PathBuf>, SchemaError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|extension| extension == SCHEMA_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Reads and parses a single schema file.
///
/// Each file is parsed with its own name table, so named types are not
/// shared between files.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read, its root is not an
/// object, or it does not declare a valid schema.
pub fn read_schema_file(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text).map_err(crate::error::ParseError::json)?;
    if !value.is_object() {
        return Err(SchemaError::UnsupportedRoot {
            path: path.display().to_string(),
            found: json_kind(&value).to_string(),
        });
    }
    tracing::debug!("parsing {}", path.display());
    Ok(SchemaParser::new().parse(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SUIT: &str = r#"{"type": "enum", "name": "Suit", "symbols": ["SPADES", "HEARTS"]}"#;
    const MD5: &str = r#"{"type": "fixed", "name": "MD5", "size": 16}"#;

    #[test]
    fn test_read_directory_in_path_order() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("b_suit.avsc"), SUIT).expect("Failed to write");
        fs::write(dir.path().join("a_md5.avsc"), MD5).expect("Failed to write");
        fs::write(dir.path().join("notes.txt"), "not a schema").expect("Failed to write");

        let schemas = read_path(dir.path()).expect("Failed to read");
        let names: Vec<String> = schemas
            .iter()
            .filter_map(|schema| schema.name().map(|name| name.fullname()))
            .collect();
        assert_eq!(names, vec!["MD5", "Suit"]);
    }

    #[test]
    fn test_read_nested_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let nested = dir.path().join("sub").join("deeper");
        fs::create_dir_all(&nested).expect("Failed to create dir");
        fs::write(dir.path().join("b_suit.avsc"), SUIT).expect("Failed to write");
        fs::write(dir.path().join("sub").join("x.avsc"), MD5).expect("Failed to write");
        fs::write(nested.join("readme.md"), "# schemas").expect("Failed to write");
        fs::write(
            nested.join("a.avsc"),
            r#"{"type": "enum", "name": "Deep", "namespace": "com.acme", "symbols": ["A"]}"#,
        )
        .expect("Failed to write");

        let files = schema_files(dir.path()).expect("Failed to list");
        let relative: Vec<PathBuf> = files
            .iter()
            .map(|file| file.strip_prefix(dir.path()).expect("Failed to strip").to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("b_suit.avsc"),
                PathBuf::from("sub/deeper/a.avsc"),
                PathBuf::from("sub/x.avsc"),
            ]
        );

        let schemas = read_path(dir.path()).expect("Failed to read");
        let names: Vec<String> = schemas
            .iter()
            .filter_map(|schema| schema.name().map(|name| name.fullname()))
            .collect();
        assert_eq!(names, vec!["Suit", "com.acme.Deep", "MD5"]);
    }

    #[test]
    fn test_read_single_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("suit.avsc");
        fs::write(&file, SUIT).expect("Failed to write");
        let schemas = read_path(&file).expect("Failed to read");
        assert_eq!(schemas.len(), 1);
    }

    #[test]
    fn test_unsupported_root() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("list.avsc");
        fs::write(&file, r#"["null", "string"]"#).expect("Failed to write");
        assert!(matches!(
            read_schema_file(&file),
            Err(SchemaError::UnsupportedRoot { found, .. }) if found == "array"
        ));
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(matches!(
            read_path(dir.path().join("missing.avsc")),
            Err(SchemaError::Io(_))
        ));
    }
}

//! Source files of this library, for vendoring into generated code.
//!
//! Every module refers to its siblings through `super::`, so the files work
//! unchanged when mounted as a submodule of a generated tree. This module is
//! not part of the vendored set; the linker drops its declaration from
//! `lib.rs`.

/// Declaration of this module in `lib.rs`.
pub const SOURCES_DECLARATION: &str = "pub mod sources;";

/// Relative path and content of every vendored file.
pub const FILES: &[(&str, &str)] = &[
    ("lib.rs", include_str!("lib.rs")),
    ("apache_driver.rs", include_str!("apache_driver.rs")),
    ("convert.rs", include_str!("convert.rs")),
    ("datum.rs", include_str!("datum.rs")),
    ("decimal.rs", include_str!("decimal.rs")),
    ("driver.rs", include_str!("driver.rs")),
    ("enums.rs", include_str!("enums.rs")),
    ("error.rs", include_str!("error.rs")),
    ("fixed.rs", include_str!("fixed.rs")),
    ("json_driver.rs", include_str!("json_driver.rs")),
    ("object.rs", include_str!("object.rs")),
    ("record.rs", include_str!("record.rs")),
    ("schema_walk.rs", include_str!("schema_walk.rs")),
    ("union.rs", include_str!("union.rs")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_use_relative_paths() {
        for (path, content) in FILES {
            assert!(!content.contains("crate::"), "{} refers to the crate root", path);
        }
    }

    #[test]
    fn test_lib_declares_sources() {
        let (_, lib) = FILES[0];
        assert!(lib.lines().any(|line| line.trim() == SOURCES_DECLARATION));
    }
}

//! # avroforge Generated
//!
//! Rust types generated by the build script from the schemas under
//! `schemas/`, compiled against `avroforge-core`.
//!
//! This crate provides:
//! - The generated module tree, mounted at [`generated`]
//! - Records with builders, enums, fixed and fixed decimal types
//! - Cross-namespace, recursive and reserved-name declarations

pub mod generated;

pub use generated::DEFAULT_DRIVER;

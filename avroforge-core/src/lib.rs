//! # avroforge Core
//!
//! Runtime base library for types generated by avroforge.
//!
//! This crate provides:
//! - The [`Datum`] value tree and [`ToDatum`]/[`FromDatum`] conversions
//! - Object, record, enum, fixed and fixed decimal contracts
//! - Tagged unions for multi-branch Avro unions
//! - Codec drivers behind an explicit [`DriverProxy`]
//! - Error types for runtime operations
//!
//! Modules refer to each other through `super::` paths so the library can be
//! mounted as a submodule of a generated tree.

pub mod apache_driver;
pub mod convert;
pub mod datum;
pub mod decimal;
pub mod driver;
pub mod enums;
pub mod error;
pub mod fixed;
pub mod json_driver;
pub mod object;
pub mod record;
pub mod schema_walk;
pub mod union;

pub mod sources;

pub use apache_driver::ApacheAvroBinaryDriver;
pub use convert::{FromDatum, ToDatum};
pub use datum::Datum;
pub use decimal::{AvroFixedDecimal, Decimal};
pub use driver::{AvroDriver, DEFAULT_DRIVER, DriverFactory, DriverProxy, DriverRegistry};
pub use enums::{AvroEnum, enum_from_datum, enum_to_datum};
pub use error::{CoreError, Result};
pub use fixed::{AvroFixed, FixedBytes, fixed_from_datum, fixed_to_datum};
pub use json_driver::JsonDriver;
pub use object::AvroObject;
pub use record::{AvroRecord, RecordBuilder, RecordDatum};
pub use union::{Union2, Union3, Union4, Union5, Union6, Union7, Union8};

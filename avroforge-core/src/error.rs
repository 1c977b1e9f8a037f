//! Error types for avroforge runtime operations.

use thiserror::Error;

/// Runtime error type for generated Avro objects.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Datum does not have the shape the target type expects.
    #[error("invalid value for {target}: {message}")]
    Value {
        /// Target type name.
        target: String,
        /// Description of the mismatch.
        message: String,
    },

    /// Symbol is not declared by the enum.
    #[error("unknown symbol '{symbol}' for enum {enum_name}")]
    UnknownSymbol {
        /// Enum type name.
        enum_name: String,
        /// Rejected symbol.
        symbol: String,
    },

    /// Record field was never set.
    #[error("missing field '{field}' for record {record}")]
    MissingField {
        /// Record type name.
        record: String,
        /// Field name.
        field: String,
    },

    /// Decimal value does not fit the fixed storage.
    #[error("decimal {value} does not fit {size} bytes with precision {precision}")]
    DecimalOverflow {
        /// Rendered decimal value.
        value: String,
        /// Storage size in bytes.
        size: usize,
        /// Declared precision.
        precision: u32,
    },

    /// Driver module is not registered.
    #[error("driver module '{module}' not found")]
    DriverModuleNotFound {
        /// Requested module.
        module: String,
    },

    /// Driver module has no class of the requested name.
    #[error("driver class '{class}' not found in module '{module}'")]
    DriverClassNotFound {
        /// Driver module.
        module: String,
        /// Requested class.
        class: String,
    },

    /// Driver failed to initialize.
    #[error("failed to load driver '{driver}': {reason}")]
    DriverLoadFailure {
        /// Driver path.
        driver: String,
        /// Failure description.
        reason: String,
    },

    /// Read or write attempted before a driver was loaded.
    #[error("no driver loaded")]
    DriverUnloaded,

    /// Avro codec error.
    #[error("codec error: {0}")]
    Codec(#[from] apache_avro::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Creates a value error.
    pub fn value(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Value {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Creates a value error for a datum of the wrong kind.
    pub fn unexpected(target: impl Into<String>, expected: &str, found: &str) -> Self {
        Self::value(target, format!("expected {}, found {}", expected, found))
    }

    /// Creates a missing field error.
    pub fn missing_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            record: record.into(),
            field: field.into(),
        }
    }
}

/// Result type alias for avroforge runtime operations.
pub type Result<T> = std::result::Result<T, CoreError>;

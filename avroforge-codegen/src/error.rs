//! Error types for code generation.

use avroforge_schema::{ParseError, SchemaError};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema node with no Rust rendering.
    #[error("unsupported type '{kind}': {detail}")]
    UnsupportedType {
        /// Avro type tag of the node.
        kind: String,
        /// Why the node is unsupported.
        detail: String,
    },

    /// Type nesting deeper than the supported limit.
    #[error("type nesting exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Depth limit.
        limit: usize,
    },

    /// Schema analysis error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output directory already exists.
    #[error("target '{path}' already exists")]
    TargetExists {
        /// Target path.
        path: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            detail: detail.into(),
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

//! Error types for schema parsing and analysis.

use crate::types::MAX_SCHEMA_DEPTH;
use thiserror::Error;

/// Message prefix of the JSON reader's nesting limit error.
const JSON_RECURSION_LIMIT: &str = "recursion limit exceeded";

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Element kind or name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on {element}")]
    InvalidAttribute {
        /// Element kind or name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Unknown type reference.
    #[error("unknown type '{type_name}' referenced in '{context}'")]
    UnknownType {
        /// Referenced type name.
        type_name: String,
        /// Enclosing context.
        context: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (named type, field, symbol).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid Avro name.
    #[error("invalid {kind} name '{name}'")]
    InvalidName {
        /// Kind of name (type, namespace, field, symbol).
        kind: String,
        /// Offending name.
        name: String,
    },

    /// Nesting deeper than the supported limit.
    #[error("schema nesting exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Depth limit.
        limit: usize,
    },
}

/// Error type for schema analysis.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A value of the wrong kind was offered where a schema was expected.
    #[error("cannot wrap a JSON {found} as an Avro schema")]
    TypeKind {
        /// Kind of the rejected value.
        found: String,
    },

    /// Root document of a schema file is not a schema object.
    #[error("unsupported schema root in '{path}': expected object, found {found}")]
    UnsupportedRoot {
        /// Source file.
        path: String,
        /// Kind of the rejected root.
        found: String,
    },

    /// Traversal deeper than the supported limit.
    #[error("schema nesting exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Depth limit.
        limit: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Converts a JSON reader error.
    ///
    /// Hitting the reader's own nesting limit is reported as
    /// `DepthExceeded`, the same as a schema nested past
    /// [`MAX_SCHEMA_DEPTH`].
    pub fn json(err: serde_json::Error) -> Self {
        if err.is_syntax() && err.to_string().starts_with(JSON_RECURSION_LIMIT) {
            Self::DepthExceeded {
                limit: MAX_SCHEMA_DEPTH,
            }
        } else {
            Self::Json(err)
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidName {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type kind error for a rejected JSON value.
    #[must_use]
    pub fn type_kind(value: &serde_json::Value) -> Self {
        Self::TypeKind {
            found: json_kind(value).to_string(),
        }
    }
}

/// Returns a short human readable kind for a JSON value.
#[must_use]
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

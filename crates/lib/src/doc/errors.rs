//! Error types for document parsing, navigation and mutation.

use std::fmt;

use thiserror::Error;
use toml_edit::{Item, TomlError, Value};

/// Coarse shape of a document item, as reported in type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A string, number, boolean or datetime
    Scalar,
    /// A table or inline table
    Map,
    /// An array or array of tables
    Sequence,
    /// A placeholder with no value
    Empty,
}

impl NodeKind {
    pub fn of(item: &Item) -> Self {
        match item {
            Item::None => NodeKind::Empty,
            Item::Table(_) => NodeKind::Map,
            Item::ArrayOfTables(_) => NodeKind::Sequence,
            Item::Value(value) => NodeKind::of_value(value),
        }
    }

    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::InlineTable(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Scalar,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Map => "table",
            NodeKind::Sequence => "array",
            NodeKind::Empty => "nothing",
        })
    }
}

/// Structured error types for document operations.
///
/// Apart from parse failures, every variant carries the key path at which the
/// problem was found, so a host can report *where* in the manifest the
/// expected structure was missing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// The manifest text is not valid TOML
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] TomlError),

    /// A key on the requested path does not exist
    #[error("Missing node: {path}")]
    NotFound { path: String },

    /// A node on the requested path has the wrong kind
    #[error("Type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: NodeKind,
        actual: NodeKind,
    },

    /// The path cannot be used for the requested operation
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Renaming keys would leave a table with two keys of the same name
    #[error("Renaming keys in {path} would produce `{key}` twice")]
    KeyCollision { path: String, key: String },

    /// Plain data that has no TOML form, such as `null`
    #[error("Cannot represent {found} at {path} in a manifest")]
    Unrepresentable { path: String, found: &'static str },
}

impl DocError {
    /// Check if this error indicates a missing node
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocError::NotFound { .. })
    }

    /// Check if this error is related to node kinds
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Check if this error reports a key rename collision
    pub fn is_key_collision(&self) -> bool {
        matches!(self, DocError::KeyCollision { .. })
    }

    /// Check if the manifest text failed to parse
    pub fn is_parse_error(&self) -> bool {
        matches!(self, DocError::Parse(_))
    }

    /// Get the path at which the error occurred, if it has one
    pub fn path(&self) -> Option<&str> {
        match self {
            DocError::NotFound { path }
            | DocError::TypeMismatch { path, .. }
            | DocError::InvalidPath { path }
            | DocError::KeyCollision { path, .. }
            | DocError::Unrepresentable { path, .. } => Some(path),
            DocError::Parse(_) => None,
        }
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}

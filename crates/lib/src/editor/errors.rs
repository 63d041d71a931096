//! Error types for manifest edits.
//!
//! Structural problems found while navigating the document (a missing
//! `package.publish`, a `dependencies` key that is not a list) are reported
//! as [`crate::doc::DocError`]; this module covers the problems specific to
//! the manifest's dependency conventions.

use thiserror::Error;

/// Structured error types for editor operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Bare dependencies were found with no range supplied for them
    #[error("No version range supplied for: {}", packages.join(", "))]
    MissingRanges { packages: Vec<String> },

    /// A dependency entry is neither a package name nor a single `name = range` pair
    #[error("Malformed dependency at {path}[{index}]: expected a name or a single `name = range` pair, found {found}")]
    MalformedDependency {
        path: String,
        index: usize,
        found: String,
    },
}

impl EditError {
    /// Check if this error reports missing version ranges
    pub fn is_missing_range(&self) -> bool {
        matches!(self, EditError::MissingRanges { .. })
    }

    /// Check if this error reports a malformed dependency entry
    pub fn is_malformed(&self) -> bool {
        matches!(self, EditError::MalformedDependency { .. })
    }

    /// Get the packages lacking a range, if this is a missing-range error
    pub fn missing_packages(&self) -> Option<&[String]> {
        match self {
            EditError::MissingRanges { packages } => Some(packages),
            _ => None,
        }
    }
}

impl From<EditError> for crate::Error {
    fn from(err: EditError) -> Self {
        crate::Error::Edit(err)
    }
}

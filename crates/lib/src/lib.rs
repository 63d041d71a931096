//!
//! manifest-edit: structure-aware editing of package manifests.
//! This library applies targeted edits to a parsed manifest while keeping the comments, key order and layout of everything it does not touch.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Document`)**: A parsed TOML manifest backed by `toml_edit`, which keeps comments, whitespace and layout next to the data.
//! * **Paths (`doc::Path`)**: Dot-separated key paths such as `package.test.dependencies` used to navigate and create sections.
//! * **Dependency lists (`editor::DependencyScope`)**: The production (`package.dependencies`) and test (`package.test.dependencies`) lists, whose entries are either bare package names or single `{ name = range }` pairs.
//! * **Edits (`editor`)**: Free functions that mutate a document in place:
//!     * Adding, removing and pinning dependencies.
//!     * Appending publish owners and setting the publish location.
//!     * Pinning the workspace package set to a registry version.
//!     * Migrating v1 snake_case keys to camelCase.

pub mod constants;
pub mod doc;
pub mod editor;

pub use doc::Document;
pub use editor::{
    DependencyScope, Migration, add_owner, add_packages, add_publish_location, add_ranges,
    migrate_v1, remove_packages, set_package_set_version,
};

/// Result type used throughout the manifest-edit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the manifest-edit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured document errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured edit errors from the editor module
    #[error(transparent)]
    Edit(editor::EditError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Doc(_) => "doc",
            Error::Edit(_) => "editor",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a required section was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error reports bare dependencies without a version range.
    pub fn is_missing_range(&self) -> bool {
        match self {
            Error::Edit(edit_err) => edit_err.is_missing_range(),
            _ => false,
        }
    }

    /// Check if this error reports two keys that would share a name after a rename.
    pub fn is_key_collision(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_key_collision(),
            _ => false,
        }
    }

    /// Check if this error indicates a malformed manifest entry.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Edit(edit_err) => edit_err.is_malformed(),
            _ => false,
        }
    }

    /// Check if this error is document-structure related.
    pub fn is_doc_error(&self) -> bool {
        matches!(self, Error::Doc(_))
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}

//! Formatting-preserving manifest documents.
//!
//! A [`Document`] wraps a [`toml_edit::DocumentMut`], which keeps every
//! comment, blank line, quoting choice and array layout it was parsed with.
//! Edits go through the TOML tree in place, so printing the document back
//! out reproduces everything an edit did not touch byte for byte.
//!
//! This module adds what the editor needs on top of the TOML tree:
//!
//! - **Navigation**: [`Document::get_in`], [`require_table_mut`], [`require_array_mut`]
//! - **Mutation**: [`Document::set_in`], [`get_or_insert_with`]
//! - **Layout**: [`BlockList`] for rewriting arrays one entry per line
//! - **Key rewriting**: [`Document::rename_keys`]
//! - **Plain data**: [`to_json`], [`from_json`], [`from_serialize`]
//!
//! # Usage
//!
//! ```
//! use manifest_edit::doc::Document;
//!
//! let mut doc: Document = "[package]\nname = \"example\" # keep me\n".parse()?;
//! doc.set_in("workspace.packageSet.registry", "41.2.0")?;
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "[package]\nname = \"example\" # keep me\n\n[workspace.packageSet]\nregistry = \"41.2.0\"\n"
//! );
//! # Ok::<(), manifest_edit::doc::DocError>(())
//! ```

mod block;
pub mod errors;
mod item;
mod json;
mod keys;
pub mod path;

use std::{fmt, str::FromStr};

use toml_edit::{DocumentMut, Item, Table};

pub use block::{BlockEntry, BlockList, set_block};
pub use errors::{DocError, NodeKind};
pub use item::{get_or_insert_with, require_array, require_array_mut, require_table, require_table_mut};
pub use json::{from_json, from_serialize, to_json};
pub use path::{Path, PathBuf};

// Re-export the macro from crate root
pub use crate::path;

/// A parsed manifest.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: DocumentMut,
}

impl Document {
    /// Creates an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses manifest text
    pub fn parse(text: &str) -> Result<Self, DocError> {
        Ok(Self {
            inner: text.parse::<DocumentMut>()?,
        })
    }

    pub fn as_toml(&self) -> &DocumentMut {
        &self.inner
    }

    pub fn as_toml_mut(&mut self) -> &mut DocumentMut {
        &mut self.inner
    }

    pub fn into_toml(self) -> DocumentMut {
        self.inner
    }

    /// The top-level table
    pub fn root(&self) -> &Table {
        self.inner.as_table()
    }

    pub fn root_mut(&mut self) -> &mut Table {
        self.inner.as_table_mut()
    }

    /// Returns true if an item exists at the given path
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get_in(path).is_ok()
    }

    /// Gets an item by key path. The empty path is the root table.
    pub fn get_in(&self, path: impl AsRef<Path>) -> Result<&Item, DocError> {
        let mut visited = PathBuf::new();
        let mut current = self.inner.as_item();
        for segment in path.as_ref().components() {
            let table = require_table(current, &visited)?;
            visited = visited.push(segment);
            current = table.get(segment).ok_or_else(|| DocError::NotFound {
                path: visited.to_string(),
            })?;
        }
        Ok(current)
    }

    /// Mutable variant of [`Document::get_in`]
    pub fn get_in_mut(&mut self, path: impl AsRef<Path>) -> Result<&mut Item, DocError> {
        let mut visited = PathBuf::new();
        let mut current = self.inner.as_item_mut();
        for segment in path.as_ref().components() {
            let table = require_table_mut(current, &visited)?;
            visited = visited.push(segment);
            current = table.get_mut(segment).ok_or_else(|| DocError::NotFound {
                path: visited.to_string(),
            })?;
        }
        Ok(current)
    }

    /// Sets the item at a key path, creating intermediate tables as needed.
    ///
    /// Created tables are implicit, so a table that only holds other tables
    /// gets no header of its own. When a plain value replaces another plain
    /// value, the old value's surrounding whitespace and trailing comment are
    /// kept. Returns the replaced item, if any.
    pub fn set_in(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Item>,
    ) -> Result<Option<Item>, DocError> {
        let path = path.as_ref();
        let mut value = value.into();
        let (Some(key), false) = (path.last(), value.is_none()) else {
            return Err(DocError::InvalidPath {
                path: path.to_string(),
            });
        };

        let mut visited = PathBuf::new();
        let mut table = require_table_mut(self.inner.as_item_mut(), &visited)?;
        for segment in path.components().take(path.len() - 1) {
            visited = visited.push(segment);
            let item = get_or_insert_with(table, segment, &visited, implicit_table)?;
            table = require_table_mut(item, &visited)?;
        }

        if let (Some(Item::Value(old)), Item::Value(new)) = (table.get(key), &mut value) {
            *new.decor_mut() = old.decor().clone();
        }
        Ok(table.insert(key, value))
    }

    /// Returns the plain data view of the whole document
    pub fn to_json(&self) -> serde_json::Value {
        to_json(self.inner.as_item())
    }
}

fn implicit_table() -> Item {
    let mut table = Table::new();
    table.set_implicit(true);
    Item::Table(table)
}

impl FromStr for Document {
    type Err = DocError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<DocumentMut> for Document {
    fn from(inner: DocumentMut) -> Self {
        Self { inner }
    }
}

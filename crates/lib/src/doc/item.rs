//! Typed access to document items.
//!
//! A table here means either a `[table]` or an inline `{ ... }` table, both
//! seen through [`TableLike`]. An array means an inline `[ ... ]` array.

use toml_edit::{Array, Item, TableLike};

use super::{
    errors::{DocError, NodeKind},
    path::Path,
};

fn mismatch(path: impl AsRef<Path>, expected: NodeKind, actual: NodeKind) -> DocError {
    DocError::TypeMismatch {
        path: path.as_ref().to_string(),
        expected,
        actual,
    }
}

/// Returns the item as a table, or a type error naming `path`
pub fn require_table(item: &Item, path: impl AsRef<Path>) -> Result<&dyn TableLike, DocError> {
    item.as_table_like()
        .ok_or_else(|| mismatch(path, NodeKind::Map, NodeKind::of(item)))
}

/// Mutable variant of [`require_table`]
pub fn require_table_mut(
    item: &mut Item,
    path: impl AsRef<Path>,
) -> Result<&mut dyn TableLike, DocError> {
    let actual = NodeKind::of(item);
    item.as_table_like_mut()
        .ok_or_else(|| mismatch(path, NodeKind::Map, actual))
}

/// Returns the item as an array, or a type error naming `path`
pub fn require_array(item: &Item, path: impl AsRef<Path>) -> Result<&Array, DocError> {
    item.as_array()
        .ok_or_else(|| mismatch(path, NodeKind::Sequence, NodeKind::of(item)))
}

/// Mutable variant of [`require_array`]
pub fn require_array_mut(item: &mut Item, path: impl AsRef<Path>) -> Result<&mut Array, DocError> {
    let actual = NodeKind::of(item);
    item.as_array_mut()
        .ok_or_else(|| mismatch(path, NodeKind::Sequence, actual))
}

/// Returns the item under `key`, inserting `default()` first if it is missing.
///
/// Inserting into an inline table turns a `Table` default into an inline
/// table. `path` is the path of `key`, used for error reporting.
pub fn get_or_insert_with<'a, F>(
    table: &'a mut dyn TableLike,
    key: &str,
    path: impl AsRef<Path>,
    default: F,
) -> Result<&'a mut Item, DocError>
where
    F: FnOnce() -> Item,
{
    if !table.contains_key(key) {
        let item = default();
        if item.is_none() {
            return Err(DocError::InvalidPath {
                path: path.as_ref().to_string(),
            });
        }
        table.insert(key, item);
    }
    table.get_mut(key).ok_or_else(|| DocError::NotFound {
        path: path.as_ref().to_string(),
    })
}

//! Migration of v1 manifests, whose keys were written in snake_case.

use tracing::debug;

use crate::{Result, doc::Document};

/// Outcome of [`migrate_v1`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Migration {
    /// This many keys were rewritten
    Changed(usize),
    /// No key needed rewriting; the document is exactly as it was
    Unchanged,
}

impl Migration {
    pub fn is_changed(self) -> bool {
        matches!(self, Migration::Changed(_))
    }

    /// Number of keys rewritten
    pub fn renamed(self) -> usize {
        match self {
            Migration::Changed(n) => n,
            Migration::Unchanged => 0,
        }
    }
}

/// Rewrites every snake_case table key in the document to camelCase.
///
/// Every `_` followed by a character is removed and the character uppercased,
/// at any depth and regardless of what the key means (`foo_bar_baz` becomes
/// `fooBarBaz`). A key keeps its position, whitespace and comments; only its
/// text changes. Table headers follow the keys they are made of.
///
/// Running the migration on its own output always returns
/// [`Migration::Unchanged`].
///
/// # Errors
///
/// Fails with [`crate::doc::DocError::KeyCollision`], leaving the document
/// untouched, when a rewritten key would clash with another key of the same
/// table (`foo_bar` next to `fooBar`).
pub fn migrate_v1(doc: &mut Document) -> Result<Migration> {
    let renamed = doc.rename_keys(camel_case_key)?;

    if renamed == 0 {
        debug!("No keys to migrate");
        Ok(Migration::Unchanged)
    } else {
        debug!(renamed, "Migrated v1 keys");
        Ok(Migration::Changed(renamed))
    }
}

/// Returns the camelCase form of `key`, or `None` if it has no `_x` sequence.
///
/// Passes repeat until nothing is left to replace, so `a__b` becomes `a_b`
/// and then `aB`. A trailing `_` has no following character and is kept.
fn camel_case_key(key: &str) -> Option<String> {
    let mut current = camel_case_pass(key)?;
    while let Some(next) = camel_case_pass(&current) {
        current = next;
    }
    Some(current)
}

/// One left-to-right replacement pass
fn camel_case_pass(key: &str) -> Option<String> {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut changed = false;

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(_)) => {
                if let Some(next) = chars.next() {
                    out.extend(next.to_uppercase());
                    changed = true;
                }
            }
            _ => out.push(c),
        }
    }

    changed.then_some(out)
}

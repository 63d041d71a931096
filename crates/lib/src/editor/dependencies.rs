//! Dependency list edits: adding, removing and pinning packages.
//!
//! A dependency list is an array whose entries are either a bare package
//! name (`"prelude"`) or an inline table with a single `name = range` pair
//! (`{ console = ">=6.0.0 <7.0.0" }`). Every edit here re-sorts the list by
//! package name and rewrites it one entry per line; comments stay with the
//! entry they describe.

use std::collections::{BTreeMap, BTreeSet};

use toml_edit::{Array, InlineTable, Item, Table, Value};
use tracing::debug;

use super::errors::EditError;
use crate::{
    Result,
    constants::{
        DEFAULT_TEST_MAIN, DEPENDENCIES, DEPENDENCIES_PATH, MAIN, PACKAGE, TEST,
        TEST_DEPENDENCIES_PATH, TEST_PATH,
    },
    doc::{
        BlockEntry, BlockList, Document, Path, get_or_insert_with, require_array_mut,
        require_table_mut,
    },
};

/// Which dependency list an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyScope {
    /// `package.dependencies`
    Main,
    /// `package.test.dependencies`
    Test,
}

impl DependencyScope {
    /// Key path of the dependency list for this scope
    pub fn path(self) -> &'static Path {
        match self {
            DependencyScope::Main => Path::new(DEPENDENCIES_PATH),
            DependencyScope::Test => Path::new(TEST_DEPENDENCIES_PATH),
        }
    }
}

/// A classified dependency list entry.
#[derive(Debug, Clone, Copy)]
pub enum DependencyEntry<'a> {
    /// A package name with no version constraint
    Bare { name: &'a str },
    /// A single `name = range` pair
    Ranged { name: &'a str, range: &'a Value },
}

impl<'a> DependencyEntry<'a> {
    /// Classifies a list entry, returning `None` for any other shape
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(DependencyEntry::Bare {
                name: name.value(),
            }),
            Value::InlineTable(table) if table.len() == 1 => table
                .iter()
                .next()
                .map(|(name, range)| DependencyEntry::Ranged { name, range }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            DependencyEntry::Bare { name } | DependencyEntry::Ranged { name, .. } => name,
        }
    }

    pub fn range(&self) -> Option<&'a Value> {
        match *self {
            DependencyEntry::Bare { .. } => None,
            DependencyEntry::Ranged { range, .. } => Some(range),
        }
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, DependencyEntry::Ranged { .. })
    }
}

/// Classifies every entry of a dependency list, failing on the first malformed one
fn entries<'a>(
    deps: &'a Array,
    path: &Path,
) -> std::result::Result<Vec<DependencyEntry<'a>>, EditError> {
    deps.iter()
        .enumerate()
        .map(|(index, value)| {
            DependencyEntry::classify(value).ok_or_else(|| EditError::MalformedDependency {
                path: path.to_string(),
                index,
                found: describe(value),
            })
        })
        .collect()
}

fn describe(value: &Value) -> String {
    match value {
        Value::InlineTable(table) => format!("an inline table with {} keys", table.len()),
        other => format!("a value of type {}", other.type_name()),
    }
}

fn entry_name(entry: &BlockEntry) -> Option<&str> {
    DependencyEntry::classify(entry.value()).map(|dep| dep.name())
}

/// Stable sort on package name, then one entry per line
fn write_sorted(mut list: BlockList, deps: &mut Array) {
    list.entries_mut()
        .sort_by(|a, b| entry_name(a).cmp(&entry_name(b)));
    list.write(deps);
}

fn default_test_section() -> Item {
    let mut test = Table::new();
    test.insert(MAIN, Item::from(DEFAULT_TEST_MAIN));
    test.insert(DEPENDENCIES, Item::from(Array::new()));
    Item::Table(test)
}

/// Adds packages to a dependency list.
///
/// Creates `package.test` (as `main = "Test.Main"` with an empty
/// `dependencies` list) and the `dependencies` list when they are missing;
/// `package` itself must exist. Packages already present keep their entry
/// untouched, so a `name = range` pair stays pinned. Duplicate entries
/// collapse to their first occurrence. New packages are appended as bare
/// names before the list is re-sorted.
pub fn add_packages<I, S>(doc: &mut Document, scope: DependencyScope, packages: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let package = require_table_mut(doc.get_in_mut(PACKAGE)?, PACKAGE)?;
    let section = match scope {
        DependencyScope::Main => package,
        DependencyScope::Test => require_table_mut(
            get_or_insert_with(package, TEST, TEST_PATH, default_test_section)?,
            TEST_PATH,
        )?,
    };
    let deps = require_array_mut(
        get_or_insert_with(section, DEPENDENCIES, scope.path(), || {
            Item::from(Array::new())
        })?,
        scope.path(),
    )?;

    let mut pending: BTreeSet<String> = entries(deps, scope.path())?
        .iter()
        .map(|entry| entry.name().to_string())
        .collect();
    pending.extend(packages.into_iter().map(Into::into));

    let mut list = BlockList::take(deps);
    list.entries_mut()
        .retain(|entry| entry_name(entry).is_some_and(|name| pending.remove(name)));

    let added = pending.len();
    for name in pending {
        list.push(BlockEntry::new(name));
    }
    write_sorted(list, deps);

    debug!(path = %scope.path(), added, total = deps.len(), "Added packages");
    Ok(())
}

/// Removes every dependency whose name matches `should_remove`.
///
/// The dependency list must already exist; a missing list (or missing
/// `package.test`) is reported as [`crate::doc::DocError::NotFound`].
pub fn remove_packages<F>(
    doc: &mut Document,
    scope: DependencyScope,
    mut should_remove: F,
) -> Result<()>
where
    F: FnMut(&str) -> bool,
{
    let deps = require_array_mut(doc.get_in_mut(scope.path())?, scope.path())?;
    entries(deps, scope.path())?;

    let mut list = BlockList::take(deps);
    let before = list.len();
    list.entries_mut()
        .retain(|entry| entry_name(entry).is_some_and(|name| !should_remove(name)));
    let removed = before - list.len();
    write_sorted(list, deps);

    debug!(path = %scope.path(), removed, total = deps.len(), "Removed packages");
    Ok(())
}

/// Pins every bare production dependency to the range given in `ranges`.
///
/// Entries that already carry a range are left as they are. Each bare entry
/// `"name"` becomes `{ name = "<range>" }`, keeping the entry's comments.
///
/// # Errors
///
/// Fails with [`EditError::MissingRanges`], before changing anything, if any
/// bare dependency has no entry in `ranges`.
pub fn add_ranges(doc: &mut Document, ranges: &BTreeMap<String, String>) -> Result<()> {
    let path = DependencyScope::Main.path();
    let deps = require_array_mut(doc.get_in_mut(path)?, path)?;

    let missing: Vec<String> = entries(deps, path)?
        .iter()
        .filter(|entry| !entry.is_ranged() && !ranges.contains_key(entry.name()))
        .map(|entry| entry.name().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EditError::MissingRanges { packages: missing }.into());
    }

    let mut list = BlockList::take(deps);
    let mut pinned = 0usize;
    for entry in list.entries_mut() {
        let range = match DependencyEntry::classify(entry.value()) {
            Some(DependencyEntry::Bare { name }) => {
                ranges.get(name).map(|range| (name.to_string(), range))
            }
            _ => None,
        };
        if let Some((name, range)) = range {
            entry.replace_value(ranged_entry(name, range));
            pinned += 1;
        }
    }
    write_sorted(list, deps);

    debug!(path = %path, pinned, total = deps.len(), "Added version ranges");
    Ok(())
}

/// Builds the `{ name = "range" }` form of a dependency
fn ranged_entry(name: String, range: &str) -> InlineTable {
    let mut entry = InlineTable::new();
    entry.insert(name, Value::from(range));
    entry
}

//! Renaming keys across a whole document.

use std::collections::HashSet;

use toml_edit::{InlineTable, Item, Key, Table, Value};
use tracing::trace;

use super::{Document, errors::DocError, path::PathBuf};

impl Document {
    /// Renames table keys at every depth, returning how many were renamed.
    ///
    /// `rename` maps a key to its new name, or `None` to leave it alone. A
    /// renamed key keeps its position, its surrounding whitespace and its
    /// comments, and a table header follows its renamed keys.
    ///
    /// # Errors
    ///
    /// Fails with [`DocError::KeyCollision`], before anything is renamed, if
    /// two keys of one table would end up with the same name.
    pub fn rename_keys<F>(&mut self, mut rename: F) -> Result<usize, DocError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let root = PathBuf::new();
        check_table(self.root(), &root, &mut rename)?;
        Ok(rename_table(self.root_mut(), &root, &mut rename))
    }
}

fn check_keys<'a, F>(
    keys: impl Iterator<Item = &'a str>,
    path: &PathBuf,
    rename: &mut F,
) -> Result<(), DocError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut seen = HashSet::new();
    for key in keys {
        let target = rename(key).unwrap_or_else(|| key.to_string());
        if !seen.insert(target.clone()) {
            return Err(DocError::KeyCollision {
                path: path.to_string(),
                key: target,
            });
        }
    }
    Ok(())
}

fn check_item<F>(item: &Item, path: &PathBuf, rename: &mut F) -> Result<(), DocError>
where
    F: FnMut(&str) -> Option<String>,
{
    match item {
        Item::None => Ok(()),
        Item::Value(value) => check_value(value, path, rename),
        Item::Table(table) => check_table(table, path, rename),
        Item::ArrayOfTables(tables) => {
            for (index, table) in tables.iter().enumerate() {
                check_table(table, &path.clone().push(index.to_string()), rename)?;
            }
            Ok(())
        }
    }
}

fn check_table<F>(table: &Table, path: &PathBuf, rename: &mut F) -> Result<(), DocError>
where
    F: FnMut(&str) -> Option<String>,
{
    check_keys(table.iter().map(|(key, _)| key), path, rename)?;
    for (key, item) in table.iter() {
        check_item(item, &path.clone().push(key), rename)?;
    }
    Ok(())
}

fn check_value<F>(value: &Value, path: &PathBuf, rename: &mut F) -> Result<(), DocError>
where
    F: FnMut(&str) -> Option<String>,
{
    match value {
        Value::InlineTable(table) => {
            check_keys(table.iter().map(|(key, _)| key), path, rename)?;
            for (key, value) in table.iter() {
                check_value(value, &path.clone().push(key), rename)?;
            }
            Ok(())
        }
        Value::Array(array) => {
            for (index, value) in array.iter().enumerate() {
                check_value(value, &path.clone().push(index.to_string()), rename)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn rename_item<F>(item: &mut Item, path: &PathBuf, rename: &mut F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    match item {
        Item::None => 0,
        Item::Value(value) => rename_value(value, path, rename),
        Item::Table(table) => rename_table(table, path, rename),
        Item::ArrayOfTables(tables) => tables
            .iter_mut()
            .enumerate()
            .map(|(index, table)| rename_table(table, &path.clone().push(index.to_string()), rename))
            .sum(),
    }
}

fn rename_value<F>(value: &mut Value, path: &PathBuf, rename: &mut F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    match value {
        Value::InlineTable(table) => rename_inline_table(table, path, rename),
        Value::Array(array) => array
            .iter_mut()
            .enumerate()
            .map(|(index, value)| rename_value(value, &path.clone().push(index.to_string()), rename))
            .sum(),
        _ => 0,
    }
}

fn rename_table<F>(table: &mut Table, path: &PathBuf, rename: &mut F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    let mut renamed = 0;
    for (key, item) in table.iter_mut() {
        renamed += rename_item(item, &path.clone().push(key.get()), rename);
    }

    let plan = plan_renames(table.iter_mut().map(|(key, _)| key.get().to_string()), rename);
    if !plan.iter().any(|(_, new)| new.is_some()) {
        return renamed;
    }

    // Re-inserting every key in order keeps renamed keys where they were
    for (old, new) in plan {
        let Some((key, item)) = table.remove_entry(&old) else {
            continue;
        };
        let key = match new {
            Some(new) => {
                trace!(path = %path, from = %old, to = %new, "Renamed key");
                renamed += 1;
                renamed_key(&key, new)
            }
            None => key,
        };
        table.insert_formatted(&key, item);
    }
    renamed
}

fn rename_inline_table<F>(table: &mut InlineTable, path: &PathBuf, rename: &mut F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    let mut renamed = 0;
    for (key, value) in table.iter_mut() {
        renamed += rename_value(value, &path.clone().push(key.get()), rename);
    }

    let plan = plan_renames(table.iter_mut().map(|(key, _)| key.get().to_string()), rename);
    if !plan.iter().any(|(_, new)| new.is_some()) {
        return renamed;
    }

    for (old, new) in plan {
        let Some((key, value)) = table.remove_entry(&old) else {
            continue;
        };
        let key = match new {
            Some(new) => {
                trace!(path = %path, from = %old, to = %new, "Renamed key");
                renamed += 1;
                renamed_key(&key, new)
            }
            None => key,
        };
        table.insert_formatted(&key, value);
    }
    renamed
}

fn plan_renames<F>(keys: impl Iterator<Item = String>, rename: &mut F) -> Vec<(String, Option<String>)>
where
    F: FnMut(&str) -> Option<String>,
{
    keys.map(|key| {
        let new = rename(&key);
        (key, new)
    })
    .collect()
}

fn renamed_key(old: &Key, new: String) -> Key {
    Key::new(new)
        .with_leaf_decor(old.leaf_decor().clone())
        .with_dotted_decor(old.dotted_decor().clone())
}

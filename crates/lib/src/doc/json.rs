//! Conversions between document items and plain data.
//!
//! Building values from native data goes through `serde_json::Value`. Objects
//! become inline tables whose keys arrive in serde_json's map order, which is
//! sorted; build an [`InlineTable`] directly when source order matters. Going
//! the other way strips all formatting and yields the plain data view of an
//! item.

use serde::Serialize;
use serde_json::Value as JsonValue;
use toml_edit::{Array, InlineTable, Item, Table, Value};

use super::{errors::DocError, path::PathBuf};

/// Returns the plain data view of an item, without formatting
pub fn to_json(item: &Item) -> JsonValue {
    match item {
        Item::None => JsonValue::Null,
        Item::Value(value) => value_to_json(value),
        Item::Table(table) => table_to_json(table),
        Item::ArrayOfTables(tables) => tables.iter().map(table_to_json).collect(),
    }
}

fn table_to_json(table: &Table) -> JsonValue {
    JsonValue::Object(
        table
            .iter()
            .map(|(key, item)| (key.to_string(), to_json(item)))
            .collect(),
    )
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.value().clone()),
        Value::Integer(n) => JsonValue::from(*n.value()),
        Value::Float(n) => JsonValue::from(*n.value()),
        Value::Boolean(b) => JsonValue::Bool(*b.value()),
        Value::Datetime(dt) => JsonValue::String(dt.value().to_string()),
        Value::Array(array) => array.iter().map(value_to_json).collect(),
        Value::InlineTable(table) => JsonValue::Object(
            table
                .iter()
                .map(|(key, value)| (key.to_string(), value_to_json(value)))
                .collect(),
        ),
    }
}

/// Builds a TOML value from plain data, e.g. a `serde_json::json!` literal.
///
/// Fails on `null`, which TOML has no way to write.
pub fn from_json(value: JsonValue) -> Result<Value, DocError> {
    convert(value, &PathBuf::new())
}

/// Builds a TOML value from any serializable native value
pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> crate::Result<Value> {
    let json = serde_json::to_value(value)?;
    Ok(from_json(json)?)
}

fn convert(value: JsonValue, path: &PathBuf) -> Result<Value, DocError> {
    let unrepresentable = |found| DocError::Unrepresentable {
        path: path.to_string(),
        found,
    };

    Ok(match value {
        JsonValue::Null => return Err(unrepresentable("null")),
        JsonValue::Bool(b) => Value::from(b),
        JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::from(i),
            (None, Some(f)) => Value::from(f),
            (None, None) => return Err(unrepresentable("a number")),
        },
        JsonValue::String(s) => Value::from(s),
        JsonValue::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| convert(item, &path.clone().push(index.to_string())))
                .collect::<Result<Array, _>>()?,
        ),
        JsonValue::Object(entries) => {
            let mut table = InlineTable::new();
            for (key, item) in entries {
                let item = convert(item, &path.clone().push(&key))?;
                table.insert(key, item);
            }
            Value::InlineTable(table)
        }
    })
}

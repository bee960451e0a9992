//! Snapshot Decoding
//!
//! Structural checks on pushed task lists. Extra fields on a task are
//! ignored; wrong or missing `name`/`done` fields reject the whole snapshot.

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::schema::Task;

/// Decode snapshot JSON text
pub fn decode_snapshot(text: &str) -> BridgeResult<Vec<Task>> {
    let value: Value = serde_json::from_str(text)?;
    tasks_from_value(value)
}

/// Check and convert an already-parsed snapshot
pub fn tasks_from_value(value: Value) -> BridgeResult<Vec<Task>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(BridgeError::InvalidSnapshot(format!(
                "expected an array of tasks, got {}",
                kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| task_from_value(index, entry))
        .collect()
}

fn task_from_value(index: usize, entry: Value) -> BridgeResult<Task> {
    let mut fields = match entry {
        Value::Object(fields) => fields,
        other => {
            return Err(BridgeError::InvalidSnapshot(format!(
                "task {} is {}, expected an object",
                index,
                kind(&other)
            )))
        }
    };

    let name = match fields.remove("name") {
        Some(Value::String(name)) => name,
        other => {
            return Err(BridgeError::InvalidSnapshot(format!(
                "task {}: `name` must be a string, got {}",
                index,
                other.as_ref().map_or("nothing", kind)
            )))
        }
    };

    let done = match fields.get("done") {
        Some(Value::Bool(done)) => *done,
        other => {
            return Err(BridgeError::InvalidSnapshot(format!(
                "task {}: `done` must be a boolean, got {}",
                index,
                other.map_or("nothing", kind)
            )))
        }
    };

    Ok(Task { name, done })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

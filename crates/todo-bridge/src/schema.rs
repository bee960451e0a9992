//! Message Schema
//!
//! Shapes shared by the view and the host.

use serde::{Deserialize, Serialize};

use crate::error::BridgeResult;

/// A single task. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub done: bool,
}

impl Task {
    /// Create an unchecked task
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Commands the view sends to the host.
///
/// Encoded as `{"cmd": "<name>", ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum Command {
    /// The view is ready to receive snapshots
    Init,
    /// Diagnostic text for the host log
    Log { text: String },
    /// Append a new unchecked task
    AddTask { name: String },
    /// Drop every done task
    ClearDoneTasks,
    /// Set the done flag of the task at `index` in the last snapshot
    MarkTask { index: usize, done: bool },
}

impl Command {
    /// Wire name, as it appears in the `cmd` field
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Log { .. } => "log",
            Command::AddTask { .. } => "addTask",
            Command::ClearDoneTasks => "clearDoneTasks",
            Command::MarkTask { .. } => "markTask",
        }
    }

    /// Encode as JSON payload text
    pub fn encode(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON payload text
    pub fn decode(payload: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Serialize one `log` argument on its own.
///
/// Never fails: a value serde_json refuses (e.g. a map with non-string
/// keys) is rendered as `null`.
pub fn encode_log_arg<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("log argument could not be serialized: {}", e);
        "null".to_string()
    })
}

/// Join already-encoded `log` arguments with single spaces
pub fn join_log_text<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i != 0 {
            text.push(' ');
        }
        text.push_str(part.as_ref());
    }
    text
}

//! View-State Sink
//!
//! Receives full task-list snapshots pushed by the host. Every snapshot is
//! checked before the view-model is touched, so a rejected push leaves the
//! last good list in place.

use serde_json::Value;

use crate::error::BridgeResult;
use crate::schema::Task;
use crate::snapshot::{decode_snapshot, tasks_from_value};
use crate::view_model::ViewModel;

/// The only writer of a [`ViewModel`].
///
/// Not `Clone`: share it behind an `Arc` if pushes arrive on several
/// threads; writes are serialized by the view-model lock.
#[derive(Debug)]
pub struct ViewStateSink {
    view: ViewModel,
}

impl ViewStateSink {
    /// Create a sink together with the view-model it owns
    pub fn new() -> Self {
        Self {
            view: ViewModel::new(),
        }
    }

    /// Read-only handle for the dispatcher and the rendering layer
    pub fn view_model(&self) -> ViewModel {
        self.view.clone()
    }

    /// Replace the task list. Returns the new revision.
    pub fn apply_snapshot(&self, tasks: Vec<Task>) -> u64 {
        let count = tasks.len();
        let revision = self.view.replace_tasks(tasks);
        log::debug!("applied snapshot r{} ({} tasks)", revision, count);
        revision
    }

    /// Apply a snapshot that arrived as a JSON value
    pub fn apply_value(&self, value: Value) -> BridgeResult<u64> {
        match tasks_from_value(value) {
            Ok(tasks) => Ok(self.apply_snapshot(tasks)),
            Err(e) => {
                log::warn!("snapshot rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Apply a snapshot that arrived as JSON text
    pub fn apply_json(&self, text: &str) -> BridgeResult<u64> {
        match decode_snapshot(text) {
            Ok(tasks) => Ok(self.apply_snapshot(tasks)),
            Err(e) => {
                log::warn!("snapshot rejected: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for ViewStateSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::Phase;
    use serde_json::json;

    #[test]
    fn test_snapshot_replaces_everything() {
        let sink = ViewStateSink::new();
        let view = sink.view_model();
        sink.apply_snapshot(vec![Task::new("a")]);

        sink.apply_snapshot(vec![Task::new("b").with_done(true)]);

        assert_eq!(view.tasks(), vec![Task::new("b").with_done(true)]);
    }

    #[test]
    fn test_rejected_snapshot_keeps_last_good_state() {
        let sink = ViewStateSink::new();
        let view = sink.view_model();
        sink.apply_snapshot(vec![Task::new("a")]);

        assert!(sink.apply_value(json!([{"name": "b", "done": "no"}])).is_err());
        assert!(sink.apply_json("{").is_err());

        assert_eq!(view.tasks(), vec![Task::new("a")]);
        assert_eq!(view.revision(), 1);
    }

    #[test]
    fn test_rejected_first_snapshot_keeps_phase() {
        let sink = ViewStateSink::new();
        assert!(sink.apply_json(r#"{"tasks": []}"#).unwrap_err().is_invalid_snapshot());
        assert_eq!(sink.view_model().phase(), Phase::Uninitialized);
        assert_eq!(sink.view_model().revision(), 0);
    }

    #[test]
    fn test_revision_counts_applied_snapshots() {
        let sink = ViewStateSink::new();
        assert_eq!(sink.apply_json("[]").unwrap(), 1);
        assert_eq!(sink.apply_value(json!([])).unwrap(), 2);
        assert_eq!(sink.apply_snapshot(Vec::new()), 3);
    }
}

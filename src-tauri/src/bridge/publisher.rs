//! Snapshot Publisher
//!
//! Where the host sends full task lists. The Tauri app handle emits them as
//! an event; tests record them.

use tauri::{AppHandle, Emitter, Runtime};
use todo_bridge::{Task, SNAPSHOT_EVENT};

/// Push side of the bridge
pub trait SnapshotPublisher {
    fn publish(&self, tasks: &[Task]) -> Result<(), String>;
}

impl<R: Runtime> SnapshotPublisher for AppHandle<R> {
    fn publish(&self, tasks: &[Task]) -> Result<(), String> {
        self.emit(SNAPSHOT_EVENT, tasks).map_err(|e| e.to_string())
    }
}

//! View-Model
//!
//! The view's cached mirror of the host task list. Handles are cheap clones
//! of one shared state; only [`ViewStateSink`](crate::ViewStateSink) can
//! replace the task list. The one other write is the phase step from
//! `Uninitialized` to `AwaitingFirstSnapshot`, made by
//! [`CommandDispatcher::init`](crate::CommandDispatcher::init); it never
//! touches tasks or the revision.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::schema::Task;

/// Lifecycle of one view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing sent, nothing received
    #[default]
    Uninitialized,
    /// `init` sent, no snapshot yet
    AwaitingFirstSnapshot,
    /// At least one snapshot applied
    Live,
}

#[derive(Debug, Default)]
struct ViewState {
    tasks: Vec<Task>,
    phase: Phase,
    revision: u64,
}

/// Read-only handle on the view-model.
///
/// Task indices refer to the last applied snapshot. The host must not
/// reorder its list between the snapshot a user clicked on and the
/// `markTask` that click produced.
#[derive(Debug, Clone)]
pub struct ViewModel {
    state: Arc<RwLock<ViewState>>,
}

impl ViewModel {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ViewState::default())),
        }
    }

    /// Copy of the current task list
    pub fn tasks(&self) -> Vec<Task> {
        self.state.read().tasks.clone()
    }

    pub fn task(&self, index: usize) -> Option<Task> {
        self.state.read().tasks.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().tasks.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.state.read().phase
    }

    /// Number of snapshots applied so far
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Record that `init` went out. Returns the phase before the call.
    pub(crate) fn note_init_sent(&self) -> Phase {
        let mut state = self.state.write();
        let previous = state.phase;
        if previous == Phase::Uninitialized {
            state.phase = Phase::AwaitingFirstSnapshot;
        }
        previous
    }

    /// Swap in a whole new list. Sink only.
    pub(crate) fn replace_tasks(&self, tasks: Vec<Task>) -> u64 {
        let mut state = self.state.write();
        state.tasks = tasks;
        state.phase = Phase::Live;
        state.revision += 1;
        state.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let view = ViewModel::new();
        let other = view.clone();
        view.replace_tasks(vec![Task::new("a")]);
        assert_eq!(other.tasks(), vec![Task::new("a")]);
        assert_eq!(other.revision(), 1);
    }

    #[test]
    fn test_init_note_leaves_tasks_and_revision() {
        let view = ViewModel::new();
        view.replace_tasks(vec![Task::new("a")]);
        view.note_init_sent();
        assert_eq!(view.tasks(), vec![Task::new("a")]);
        assert_eq!(view.revision(), 1);
    }

    #[test]
    fn test_init_only_advances_from_uninitialized() {
        let view = ViewModel::new();
        assert_eq!(view.note_init_sent(), Phase::Uninitialized);
        assert_eq!(view.phase(), Phase::AwaitingFirstSnapshot);

        view.replace_tasks(Vec::new());
        assert_eq!(view.note_init_sent(), Phase::Live);
        assert_eq!(view.phase(), Phase::Live);
    }

    #[test]
    fn test_reads() {
        let view = ViewModel::new();
        assert!(view.is_empty());
        view.replace_tasks(vec![Task::new("a"), Task::new("b").with_done(true)]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.task(1), Some(Task::new("b").with_done(true)));
        assert_eq!(view.task(2), None);
    }
}

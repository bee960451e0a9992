//! Task List
//!
//! The host-owned, authoritative list of tasks. The view only ever sees
//! copies of it pushed as snapshots.

use todo_bridge::{Command, Task};

use super::error::{DomainError, DomainResult};

/// Ordered task list. Positions are the task identities the view uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append an unchecked task
    pub fn add(&mut self, name: String) {
        self.tasks.push(Task::new(name));
    }

    /// Set the done flag of the task at `index`
    pub fn mark(&mut self, index: usize, done: bool) -> DomainResult<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| DomainError::NotFound(format!("task {} (list has {})", index, len)))?;
        task.done = done;
        Ok(())
    }

    /// Drop all done tasks, keeping order. Returns how many were removed.
    pub fn clear_done(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    /// Apply one view command. `init` and `log` leave the list unchanged.
    pub fn apply(&mut self, command: &Command) -> DomainResult<()> {
        match command {
            Command::Init | Command::Log { .. } => Ok(()),
            Command::AddTask { name } => {
                self.add(name.clone());
                Ok(())
            }
            Command::MarkTask { index, done } => self.mark(*index, *done),
            Command::ClearDoneTasks => {
                let removed = self.clear_done();
                log::debug!("cleared {} done tasks", removed);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_unchecked() {
        let mut list = TaskList::new();
        list.add("a".into());
        list.add(String::new());
        assert_eq!(list.tasks(), &[Task::new("a"), Task::new("")]);
    }

    #[test]
    fn test_mark_sets_requested_state() {
        let mut list = TaskList::from_tasks(vec![Task::new("a")]);
        list.mark(0, true).unwrap();
        list.mark(0, true).unwrap();
        assert!(list.tasks()[0].done);
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut list = TaskList::from_tasks(vec![Task::new("a")]);
        let err = list.mark(3, true).unwrap_err();
        assert_eq!(err, DomainError::NotFound("task 3 (list has 1)".into()));
        assert_eq!(list.tasks(), &[Task::new("a")]);
    }

    #[test]
    fn test_clear_done_keeps_order() {
        let mut list = TaskList::from_tasks(vec![
            Task::new("a"),
            Task::new("b").with_done(true),
            Task::new("c"),
            Task::new("d").with_done(true),
        ]);
        assert_eq!(list.clear_done(), 2);
        assert_eq!(list.tasks(), &[Task::new("a"), Task::new("c")]);
    }

    #[test]
    fn test_apply_commands() {
        let mut list = TaskList::new();
        list.apply(&Command::Init).unwrap();
        list.apply(&Command::AddTask { name: "a".into() }).unwrap();
        list.apply(&Command::AddTask { name: "b".into() }).unwrap();
        list.apply(&Command::MarkTask { index: 1, done: true }).unwrap();
        list.apply(&Command::Log { text: "noise".into() }).unwrap();
        list.apply(&Command::ClearDoneTasks).unwrap();
        assert_eq!(list.tasks(), &[Task::new("a")]);
    }
}

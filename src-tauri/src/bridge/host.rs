//! Todo Host
//!
//! Owns the task list and answers every payload with a snapshot push.
//! The lock is held across apply and publish so pushes leave in the order
//! commands arrived.

use tokio::sync::Mutex;
use todo_bridge::{Command, Task};

use super::publisher::SnapshotPublisher;
use crate::domain::{DomainError, TaskList};

/// What happened to one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    Applied(Command),
    Rejected(Command, DomainError),
    Undecodable(String),
}

#[derive(Debug)]
pub struct TodoHost {
    tasks: Mutex<TaskList>,
}

impl TodoHost {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(TaskList::new()),
        }
    }

    #[cfg(test)]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(TaskList::from_tasks(tasks)),
        }
    }

    /// Copy of the current list
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().await.tasks().to_vec()
    }

    /// Decode, apply and push.
    ///
    /// The view gets no reply either way; it learns the outcome from the
    /// pushed list, which is sent even when nothing changed.
    pub async fn handle_payload<P: SnapshotPublisher>(&self, payload: &str, publisher: &P) -> HandleOutcome {
        let mut tasks = self.tasks.lock().await;

        let outcome = match Command::decode(payload) {
            Ok(command) => {
                if let Command::Log { text } = &command {
                    log::info!(target: "view", "{}", text);
                }
                match tasks.apply(&command) {
                    Ok(()) => HandleOutcome::Applied(command),
                    Err(e) => {
                        log::warn!("{} rejected: {}", command.name(), e);
                        HandleOutcome::Rejected(command, e)
                    }
                }
            }
            Err(e) => {
                log::error!("undecodable payload {:?}: {}", payload, e);
                HandleOutcome::Undecodable(e.to_string())
            }
        };

        log::debug!("{:#?}", tasks.tasks());
        if let Err(e) = publisher.publish(tasks.tasks()) {
            log::error!("failed to push snapshot: {}", e);
        }
        outcome
    }
}

//! Test Channel
//!
//! A [`HostChannel`] that records every payload instead of delivering it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::dispatcher::HostChannel;
use crate::schema::Command;

/// Records sent payloads. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload text, in send order
    pub fn payloads(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    /// Payloads decoded back into commands. Undecodable entries are skipped.
    pub fn commands(&self) -> Vec<Command> {
        self.sent
            .lock()
            .iter()
            .filter_map(|p| Command::decode(p).ok())
            .collect()
    }

    pub fn last_command(&self) -> Option<Command> {
        self.sent.lock().last().and_then(|p| Command::decode(p).ok())
    }

    /// Take everything recorded so far
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.sent.lock())
    }
}

impl HostChannel for RecordingChannel {
    fn send(&self, payload: String) {
        self.sent.lock().push(payload);
    }
}

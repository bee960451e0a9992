//! Bridge Context
//!
//! The dispatcher and the read-only view-model, provided to components.

use std::sync::Arc;

use leptos::prelude::*;
use todo_bridge::{CommandDispatcher, Task};

use crate::commands::TauriChannel;

#[derive(Clone)]
pub struct BridgeContext {
    dispatcher: Arc<CommandDispatcher<TauriChannel>>,
}

impl BridgeContext {
    pub fn new(dispatcher: Arc<CommandDispatcher<TauriChannel>>) -> Self {
        Self { dispatcher }
    }

    /// Tasks from the last applied snapshot
    pub fn tasks(&self) -> Vec<Task> {
        self.dispatcher.view_model().tasks()
    }

    pub fn add_task(&self, name: String) -> bool {
        report("addTask", self.dispatcher.add_task(name))
    }

    /// `done` is the new state, already negated by the caller
    pub fn mark_task(&self, index: usize, done: bool) -> bool {
        report("markTask", self.dispatcher.mark_task(index, done))
    }

    pub fn clear_done_tasks(&self) -> bool {
        report("clearDoneTasks", self.dispatcher.clear_done_tasks())
    }

    pub fn log(&self, message: &str) {
        self.dispatcher.log([message]);
    }
}

fn report<T>(cmd: &str, result: todo_bridge::BridgeResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("[BRIDGE] {} not sent: {}", cmd, e).into());
            false
        }
    }
}

/// Get the bridge from context
pub fn use_bridge() -> BridgeContext {
    expect_context::<BridgeContext>()
}

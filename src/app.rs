//! Todo Frontend App
//!
//! Wires the bridge together: sink and listener first, then `init`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_bridge::{CommandDispatcher, ViewStateSink};

use crate::commands::{self, TauriChannel};
use crate::components::{NewTaskForm, TaskFooter, TaskList};
use crate::context::BridgeContext;
use crate::rejection::RejectionStreak;
use crate::store::{UiState, UiStateStoreFields, UiStore};

#[component]
pub fn App() -> impl IntoView {
    let store: UiStore = UiStore::new(UiState::default());
    provide_context(store);

    let sink = ViewStateSink::new();
    let view_model = sink.view_model();
    let dispatcher = Arc::new(CommandDispatcher::new(TauriChannel, view_model.clone()));
    let bridge = BridgeContext::new(dispatcher.clone());
    provide_context(bridge.clone());

    spawn_local(async move {
        let streak = RejectionStreak::new();
        let on_applied = move |applied: Result<u64, String>| match applied {
            Ok(revision) => {
                streak.applied();
                store.phase().set(view_model.phase());
                store.last_error().set(None);
                store.revision().set(revision);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Snapshot rejected: {}", e).into());
                if streak.rejected() {
                    bridge.log(&format!("snapshot rejected: {}", e));
                }
                store.last_error().set(Some(e));
            }
        };

        // The listener must be in place before init, or the first push is lost.
        if let Err(e) = commands::listen_snapshots(sink, on_applied).await {
            web_sys::console::error_1(&format!("[APP] Cannot listen for snapshots: {}", e).into());
            return;
        }
        match dispatcher.init() {
            Ok(_) => store.phase().set(dispatcher.view_model().phase()),
            Err(e) => web_sys::console::error_1(&format!("[APP] init not sent: {}", e).into()),
        }
    });

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>
            <NewTaskForm />
            <TaskList />
            <TaskFooter />
        </main>
    }
}

//! Task Footer Component
//!
//! Counts, connection state, last push error and the clear-done button.

use leptos::prelude::*;
use todo_bridge::Phase;

use crate::context::use_bridge;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn TaskFooter() -> impl IntoView {
    let bridge = use_bridge();
    let store = use_ui_store();

    let counts = {
        let bridge = bridge.clone();
        move || {
            store.revision().track();
            let tasks = bridge.tasks();
            let done = tasks.iter().filter(|t| t.done).count();
            format!("{} tasks, {} done", tasks.len(), done)
        }
    };

    view! {
        <footer class="task-footer">
            {move || match store.phase().get() {
                Phase::Live => view! { <p class="item-count">{counts.clone()}</p> }.into_any(),
                _ => view! { <p class="connecting">"Waiting for host..."</p> }.into_any(),
            }}
            {move || store.last_error().get().map(|e| view! { <p class="bridge-error">{e}</p> })}
            <button
                class="clear-done-btn"
                on:click=move |_| {
                    bridge.clear_done_tasks();
                }
            >
                "Clear done"
            </button>
        </footer>
    }
}

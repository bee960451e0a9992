//! Task Row Component
//!
//! Plain element, no form control: a click only sends `markTask`, and the
//! row changes when the next snapshot arrives.

use leptos::prelude::*;
use todo_bridge::Task;

use crate::context::use_bridge;

fn row_class(task: &Task) -> &'static str {
    if task.done { "task-row done" } else { "task-row" }
}

/// `markTask` arguments for a click on the row at `index`
fn toggle_request(index: usize, task: &Task) -> (usize, bool) {
    (index, !task.done)
}

/// A single task. `index` is its position in the snapshot it came from.
#[component]
pub fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let bridge = use_bridge();
    let class = row_class(&task);
    let (index, done) = toggle_request(index, &task);

    view! {
        <li
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                bridge.mark_task(index, done);
            }
        >
            <span class="task-name">{task.name}</span>
        </li>
    }
}

//! New Task Form Component
//!
//! Holds the draft description and sends it as `addTask`.

use leptos::prelude::*;

use crate::context::use_bridge;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let bridge = use_bridge();
    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty drafts go through too; the host decides what to do with them.
        if bridge.add_task(draft.get_untracked()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

//! Task List Component
//!
//! Re-reads the view-model whenever the snapshot revision changes.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_bridge;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let bridge = use_bridge();
    let store = use_ui_store();

    let rows = move || {
        let revision = store.revision().get();
        bridge
            .tasks()
            .into_iter()
            .enumerate()
            .map(move |(index, task)| (revision, index, task))
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="task-list">
            <For
                each=rows
                key=|(revision, index, _)| (*revision, *index)
                children=move |(_, index, task)| view! { <TaskRow index=index task=task /> }
            />
        </ul>
    }
}

//! Task List View Component
//!
//! Renders the task list in insertion order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Task list with per-row controls
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let tasks = move || store.tasks().get();

    view! {
        <div class="task-list">
            <Show when=move || tasks().is_empty()>
                <p class="empty-hint">"No tasks yet"</p>
            </Show>
            <ul>
                <For
                    each=tasks
                    // Key on every mutable field so edits and toggles re-render the row
                    key=|task| (task.id, task.text.clone(), task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
        </div>
    }
}

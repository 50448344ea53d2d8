//! Todo List App
//!
//! Root component: seeds state from browser storage, writes changes back,
//! lays out the form, the list, and the remaining count.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditTarget, TaskForm, TaskListView};
use crate::context::AppContext;
use crate::storage::{self, LocalStorage, TaskStorage};
use crate::store::{AppState, AppStateStoreFields};
use crate::tasks;

#[component]
pub fn App(#[prop(default = true)] completion_enabled: bool) -> impl IntoView {
    let storage = LocalStorage;

    // Populate state from the stored list; malformed data degrades to empty
    let initial = storage::load_or_default(&storage);
    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", initial.len()).into());

    let store = Store::new(AppState { tasks: initial });
    provide_context(store);

    let (editing, set_editing) = signal::<Option<EditTarget>>(None);
    provide_context(AppContext::new((editing, set_editing), completion_enabled));

    // Write the list back on every change, skipping the initial load
    Effect::watch(
        move || store.tasks().get(),
        move |tasks, _, _| {
            if let Err(err) = storage.save(tasks) {
                web_sys::console::error_1(
                    &format!("[APP] Failed to persist tasks: {}", err).into(),
                );
            }
        },
        false,
    );

    let remaining = move || tasks::remaining_count(&store.tasks().get(), completion_enabled);

    view! {
        <main class="app-layout">
            <h1>"Todo List"</h1>

            <TaskForm />

            <TaskListView />

            <p class="task-count">
                {move || {
                    let n = remaining();
                    format!("{} task{} remaining", n, if n == 1 { "" } else { "s" })
                }}
            </p>
        </main>
    }
}

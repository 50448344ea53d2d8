//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::tasks;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The task list, in insertion order
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new task; empty input is a no-op. Returns the new id.
pub fn store_add_task(store: &AppStore, text: &str, now_ms: u64) -> Option<TaskId> {
    tasks::add_task(&mut *store.tasks().write(), text, now_ms)
}

/// Remove a task from the store by id
pub fn store_remove_task(store: &AppStore, id: TaskId) {
    tasks::remove_task(&mut *store.tasks().write(), id);
}

/// Flip completion on a task by id
pub fn store_toggle_task(store: &AppStore, id: TaskId) {
    tasks::toggle_task(&mut *store.tasks().write(), id);
}

/// Replace a task's text by id
pub fn store_rename_task(store: &AppStore, id: TaskId, text: &str) {
    tasks::rename_task(&mut *store.tasks().write(), id, text);
}

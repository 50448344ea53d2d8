//! Task Row Component
//!
//! One task in the list: completion toggle, inline edit, delete.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_remove_task, store_rename_task, store_toggle_task, use_app_store};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let text = StoredValue::new(task.text);

    let is_editing = move || matches!(ctx.editing.get(), Some(target) if target.id == id);

    let save_edit = move || {
        if let Some(target) = ctx.editing.get() {
            if target.id == id {
                store_rename_task(&store, id, &target.draft);
                ctx.clear_edit();
            }
        }
    };

    let draft = move || {
        ctx.editing
            .get()
            .filter(|target| target.id == id)
            .map(|target| target.draft)
            .unwrap_or_default()
    };

    view! {
        <li class=move || if completed { "task-row completed" } else { "task-row" }>
            <Show when=move || ctx.completion_enabled>
                <input
                    type="checkbox"
                    checked=completed
                    aria-label="Toggle complete"
                    on:change=move |_| store_toggle_task(&store, id)
                />
            </Show>

            <Show when=move || !is_editing()>
                <span class="task-text">{move || text.get_value()}</span>
                <button
                    class="edit-btn"
                    aria-label="Edit todo"
                    on:click=move |_| ctx.start_edit(id, text.get_value())
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    aria-label="Delete todo"
                    on:click=move |_| store_remove_task(&store, id)
                >
                    "Delete"
                </button>
            </Show>

            <Show when=is_editing>
                <input
                    class="edit-input"
                    type="text"
                    aria-label="Edit todo input"
                    autofocus=true
                    prop:value=draft
                    on:input=move |ev| ctx.update_draft(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            save_edit();
                        }
                    }
                />
                <button class="save-btn" aria-label="Save edit" on:click=move |_| save_edit()>
                    "Save"
                </button>
                <button
                    class="cancel-btn"
                    aria-label="Cancel edit"
                    on:click=move |_| ctx.clear_edit()
                >
                    "Cancel"
                </button>
            </Show>
        </li>
    }
}

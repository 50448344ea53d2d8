//! Task Form Component
//!
//! Input form for new tasks. Submitting while an edit is in progress confirms
//! that edit instead of adding.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{store_add_task, store_rename_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Confirm key while an edit target is set saves that edit
        if let Some(target) = ctx.editing.get() {
            store_rename_task(&store, target.id, &target.draft);
            ctx.clear_edit();
            return;
        }

        let text = new_text.get();
        let now_ms = js_sys::Date::now() as u64;
        if store_add_task(&store, &text, now_ms).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task..."
                aria-label="Add todo input"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit" aria-label="Add todo">"Add"</button>
        </form>
    }
}

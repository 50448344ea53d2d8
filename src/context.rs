//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::EditTarget;
use crate::models::TaskId;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Record currently being edited, with its draft text - read
    pub editing: ReadSignal<Option<EditTarget>>,
    /// Record currently being edited - write
    set_editing: WriteSignal<Option<EditTarget>>,
    /// Whether completion tracking is enabled for this mount
    pub completion_enabled: bool,
}

impl AppContext {
    pub fn new(
        editing: (ReadSignal<Option<EditTarget>>, WriteSignal<Option<EditTarget>>),
        completion_enabled: bool,
    ) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
            completion_enabled,
        }
    }

    /// Begin editing a record, seeding the draft with its current text
    pub fn start_edit(&self, id: TaskId, text: String) {
        self.set_editing.set(Some(EditTarget { id, draft: text }));
    }

    /// Replace the draft text of the record being edited
    pub fn update_draft(&self, draft: String) {
        self.set_editing.update(|target| {
            if let Some(target) = target {
                target.draft = draft;
            }
        });
    }

    /// Drop the edit target without touching the task list
    pub fn clear_edit(&self) {
        self.set_editing.set(None);
    }
}

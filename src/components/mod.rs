//! UI Components
//!
//! Reusable Leptos components.

mod edit_target;
mod task_form;
mod task_list_view;
mod task_row;

pub use edit_target::EditTarget;
pub use task_form::TaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;

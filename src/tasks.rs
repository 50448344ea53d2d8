//! Task List Operations
//!
//! Pure functions over the task vector. The reactive store and the storage
//! port stay thin wrappers around these, so list behavior is testable on the
//! host without a browser.

use crate::models::{Task, TaskId};

/// Allocate an id for a new task.
///
/// Ids are creation timestamps in milliseconds. Two tasks created inside the
/// same millisecond would collide, so the id is bumped past the current
/// maximum when needed.
pub fn next_task_id(tasks: &[Task], now_ms: u64) -> TaskId {
    let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
    now_ms.max(max_id + 1)
}

/// Append a new task with trimmed text.
///
/// Empty or whitespace-only input is a no-op and returns `None`.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, now_ms: u64) -> Option<TaskId> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let id = next_task_id(tasks, now_ms);
    tasks.push(Task::new(id, trimmed.to_string()));
    Some(id)
}

/// Remove the task with the given id, keeping the rest in order
pub fn remove_task(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Flip the completion flag on the matching task
pub fn toggle_task(tasks: &mut [Task], id: TaskId) -> bool {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = !task.completed)
        .is_some()
}

/// Replace the text of the matching task. Id and completion flag are untouched.
pub fn rename_task(tasks: &mut [Task], id: TaskId, text: &str) -> bool {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.text = text.to_string())
        .is_some()
}

/// Tasks still open. With completion tracking disabled every task counts.
pub fn remaining_count(tasks: &[Task], completion_enabled: bool) -> usize {
    if completion_enabled {
        tasks.iter().filter(|task| !task.completed).count()
    } else {
        tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task() {
        let mut tasks = Vec::new();

        let id = add_task(&mut tasks, "Buy milk", 1_000).expect("add failed");

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut tasks = Vec::new();

        add_task(&mut tasks, "  Buy milk  ", 1_000).expect("add failed");

        assert_eq!(tasks[0].text, "Buy milk");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut tasks = Vec::new();

        assert!(add_task(&mut tasks, "", 1_000).is_none());
        assert!(add_task(&mut tasks, "   \t ", 1_000).is_none());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut tasks = Vec::new();

        let first = add_task(&mut tasks, "One", 5_000).unwrap();
        let second = add_task(&mut tasks, "Two", 5_000).unwrap();
        let third = add_task(&mut tasks, "Three", 5_000).unwrap();

        assert_eq!(first, 5_000);
        assert_ne!(first, second);
        assert_ne!(second, third);
    }

    #[test]
    fn test_remove_task_keeps_order() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "A", 1).unwrap();
        let b = add_task(&mut tasks, "B", 2).unwrap();
        let c = add_task(&mut tasks, "C", 3).unwrap();

        assert!(remove_task(&mut tasks, b));

        let ids: Vec<_> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(tasks[0].text, "A");
        assert_eq!(tasks[1].text, "C");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Keep me", 1).unwrap();

        assert!(!remove_task(&mut tasks, 999));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_toggle_task() {
        let mut tasks = Vec::new();
        let id = add_task(&mut tasks, "Walk dog", 1).unwrap();

        assert!(toggle_task(&mut tasks, id));
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].text, "Walk dog");

        // Toggling again restores the original flag
        assert!(toggle_task(&mut tasks, id));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Untouched", 1).unwrap();

        assert!(!toggle_task(&mut tasks, 999));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_leaves_other_tasks_alone() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "A", 1).unwrap();
        add_task(&mut tasks, "B", 2).unwrap();

        toggle_task(&mut tasks, a);

        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_rename_task_keeps_id_and_flag() {
        let mut tasks = Vec::new();
        let id = add_task(&mut tasks, "Walk dog", 1).unwrap();
        toggle_task(&mut tasks, id);

        assert!(rename_task(&mut tasks, id, "Walk the dog"));

        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "Walk the dog");
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_rename_missing_is_noop() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Original", 1).unwrap();

        assert!(!rename_task(&mut tasks, 999, "Changed"));
        assert_eq!(tasks[0].text, "Original");
    }

    #[test]
    fn test_remaining_count() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "A", 1).unwrap();
        add_task(&mut tasks, "B", 2).unwrap();

        assert_eq!(remaining_count(&tasks, true), 2);

        toggle_task(&mut tasks, a);
        assert_eq!(remaining_count(&tasks, true), 1);
    }

    #[test]
    fn test_remaining_count_without_completion_tracking() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "A", 1).unwrap();
        add_task(&mut tasks, "B", 2).unwrap();
        toggle_task(&mut tasks, a);

        // Every task counts when the completion flag is not tracked
        assert_eq!(remaining_count(&tasks, false), 2);
    }

    #[test]
    fn test_full_session() {
        let mut tasks = Vec::new();

        let first = add_task(&mut tasks, "Buy milk", 100).unwrap();
        assert_eq!(remaining_count(&tasks, true), 1);

        let second = add_task(&mut tasks, "Walk dog", 200).unwrap();
        assert_eq!(remaining_count(&tasks, true), 2);

        toggle_task(&mut tasks, first);
        assert_eq!(remaining_count(&tasks, true), 1);

        rename_task(&mut tasks, second, "Walk the dog");
        assert_eq!(tasks[1].text, "Walk the dog");
        assert_eq!(remaining_count(&tasks, true), 1);

        remove_task(&mut tasks, first);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Walk the dog");
        assert!(!tasks[0].completed);
        assert_eq!(remaining_count(&tasks, true), 1);
    }
}

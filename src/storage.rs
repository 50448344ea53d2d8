//! Browser Storage Port
//!
//! Persists the task list as JSON under a single localStorage key. The port
//! trait keeps the view logic independent of the real browser store.

use crate::models::Task;

/// localStorage key holding the serialized task list
pub const STORAGE_KEY: &str = "todos";

/// Serialize the task list for storage
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, String> {
    serde_json::to_string(tasks).map_err(|e| e.to_string())
}

/// Deserialize a stored task list
pub fn parse_tasks(raw: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Storage port for the task list
pub trait TaskStorage {
    fn load(&self) -> Result<Vec<Task>, String>;
    fn save(&self, tasks: &[Task]) -> Result<(), String>;
}

/// Browser localStorage behind the port
#[derive(Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|_| "localStorage unavailable".to_string())?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl TaskStorage for LocalStorage {
    fn load(&self) -> Result<Vec<Task>, String> {
        let stored = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| "failed to read stored tasks".to_string())?;
        match stored {
            Some(raw) => parse_tasks(&raw),
            // Nothing stored yet: start with an empty list
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), String> {
        let raw = serialize_tasks(tasks)?;
        Self::storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|_| "failed to write stored tasks".to_string())
    }
}

/// Load the stored list, degrading malformed or unreadable data to an empty
/// list. The failure is logged, never surfaced to the user.
pub fn load_or_default(storage: &impl TaskStorage) -> Vec<Task> {
    match storage.load() {
        Ok(tasks) => tasks,
        Err(err) => {
            log_load_error(&err);
            Vec::new()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn log_load_error(err: &str) {
    web_sys::console::error_1(&format!("[STORAGE] Failed to load stored tasks: {}", err).into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_load_error(err: &str) {
    eprintln!("[STORAGE] Failed to load stored tasks: {}", err);
}


// Round-trip through the real browser store, run with `wasm-pack test --headless`
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::tasks::add_task;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = LocalStorage;
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Buy milk", 100).unwrap();

        storage.save(&tasks).expect("save failed");
        let loaded = storage.load().expect("load failed");

        assert_eq!(loaded, tasks);
    }
}

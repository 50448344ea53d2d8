//! Frontend Models
//!
//! Data structures persisted to browser storage.

use serde::{Deserialize, Serialize};

/// Task identifier: the creation timestamp in milliseconds, bumped on collision
pub type TaskId = u64;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Lists written before completion tracking omit this flag
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

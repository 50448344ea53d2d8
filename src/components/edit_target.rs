//! Edit Target Type
//!
//! Identifies the record being edited inline, with its draft text.

use crate::models::TaskId;

/// The task currently under edit, tracked by id
#[derive(Clone, Debug, PartialEq)]
pub struct EditTarget {
    /// Id of the record being edited
    pub id: TaskId,
    /// Draft text, applied on save
    pub draft: String,
}

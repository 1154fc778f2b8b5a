//! Frontend Models
//!
//! Data structures for the task list.

/// Opaque task identifier, unique within one page load
pub type TaskId = u32;

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String, completed: bool) -> Self {
        Self { id, text, completed }
    }

    /// Completed tasks are locked against editing
    pub fn is_editable(&self) -> bool {
        !self.completed
    }
}

//! Task List
//!
//! Ordered sequence of tasks. This is the single source of truth the
//! view renders from.

use crate::models::{Task, TaskId};
use crate::progress::Progress;

/// Errors from task list operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// Task text was empty after trimming
    EmptyText,
    /// No task with this id
    NotFound(TaskId),
    /// Completed tasks cannot be edited
    Completed(TaskId),
    /// A task with this id already exists
    DuplicateId(TaskId),
    /// The id counter ran past `u32::MAX`
    IdsExhausted,
}

impl std::fmt::Display for TaskListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskListError::EmptyText => write!(f, "Task text is empty"),
            TaskListError::NotFound(id) => write!(f, "Task not found: {}", id),
            TaskListError::Completed(id) => write!(f, "Task {} is completed", id),
            TaskListError::DuplicateId(id) => write!(f, "Duplicate task id: {}", id),
            TaskListError::IdsExhausted => write!(f, "No task ids left"),
        }
    }
}

impl std::error::Error for TaskListError {}

pub type TaskListResult<T> = Result<T, TaskListError>;

#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Always above every id handed out so far; `None` once past `u32::MAX`
    next_id: Option<TaskId>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Append a task. Without an explicit id the next counter value is used;
    /// an explicit id must not already be in the list.
    pub fn push(&mut self, text: String, completed: bool, id: Option<TaskId>) -> TaskListResult<TaskId> {
        if text.trim().is_empty() {
            return Err(TaskListError::EmptyText);
        }
        let id = match id {
            Some(id) if self.get(id).is_some() => return Err(TaskListError::DuplicateId(id)),
            Some(id) => id,
            None => self.next_id.ok_or(TaskListError::IdsExhausted)?,
        };
        self.next_id = match self.next_id {
            Some(next) if next > id => Some(next),
            Some(_) => id.checked_add(1),
            None => None,
        };
        self.tasks.push(Task::new(id, text, completed));
        Ok(id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self, id: TaskId) -> TaskListResult<bool> {
        let task = self.tasks.iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskListError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn remove(&mut self, id: TaskId) -> TaskListResult<Task> {
        let index = self.tasks.iter()
            .position(|task| task.id == id)
            .ok_or(TaskListError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_count(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut list = TaskList::new();
        let first = list.push("One".to_string(), false, None).unwrap();
        let second = list.push("Two".to_string(), false, None).unwrap();
        assert!(second > first);
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].text, "One");
        assert_eq!(list.tasks()[1].text, "Two");
    }

    #[test]
    fn test_push_with_explicit_id_advances_counter() {
        let mut list = TaskList::new();
        assert_eq!(list.push("Loaded".to_string(), true, Some(40)).unwrap(), 40);
        assert_eq!(list.push("Next".to_string(), false, None).unwrap(), 41);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut list = TaskList::new();
        list.push("A".to_string(), false, Some(7)).unwrap();
        assert_eq!(list.push("B".to_string(), false, Some(7)), Err(TaskListError::DuplicateId(7)));
        assert_eq!(list.len(), 1);

        let auto = list.push("C".to_string(), false, None).unwrap();
        assert_eq!(auto, 8);
        assert_eq!(list.push("D".to_string(), false, Some(auto)), Err(TaskListError::DuplicateId(8)));

        // the counter never hands out an id that was supplied explicitly
        list.push("E".to_string(), false, Some(3)).unwrap();
        assert_eq!(list.push("F".to_string(), false, None).unwrap(), 9);
    }

    #[test]
    fn test_counter_exhausted_at_max_id() {
        let mut list = TaskList::new();
        list.push("X".to_string(), false, Some(TaskId::MAX)).unwrap();
        assert_eq!(list.push("Y".to_string(), false, None), Err(TaskListError::IdsExhausted));
        assert_eq!(list.len(), 1);

        // explicit ids still work, and the counter stays exhausted
        list.push("Z".to_string(), false, Some(5)).unwrap();
        assert_eq!(list.push("W".to_string(), false, None), Err(TaskListError::IdsExhausted));
        assert_eq!(list.remove(TaskId::MAX).unwrap().text, "X");
    }

    #[test]
    fn test_push_rejects_empty_text() {
        let mut list = TaskList::new();
        assert_eq!(list.push(String::new(), false, None), Err(TaskListError::EmptyText));
        assert_eq!(list.push("   ".to_string(), false, None), Err(TaskListError::EmptyText));
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_and_counts() {
        let mut list = TaskList::new();
        let a = list.push("A".to_string(), false, None).unwrap();
        list.push("B".to_string(), false, None).unwrap();

        assert_eq!(list.toggle(a), Ok(true));
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress(), Progress::new(1, 2));

        assert_eq!(list.toggle(a), Ok(false));
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = TaskList::new();
        let a = list.push("A".to_string(), false, None).unwrap();
        let b = list.push("B".to_string(), false, None).unwrap();
        let c = list.push("C".to_string(), false, None).unwrap();

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.text, "B");
        let ids: Vec<TaskId> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_unknown_id() {
        let mut list = TaskList::new();
        assert_eq!(list.toggle(7), Err(TaskListError::NotFound(7)));
        assert_eq!(list.remove(7), Err(TaskListError::NotFound(7)));
        assert!(list.get(7).is_none());
    }
}

//! Task List Controller
//!
//! Owns the task list, the input draft and the progress indicator, and
//! applies every user action to them. Views only read from it.

use crate::celebration::Celebration;
use crate::models::{Task, TaskId};
use crate::progress::Progress;
use crate::task_list::{TaskList, TaskListError, TaskListResult};

#[derive(Debug, Clone)]
pub struct TaskListController<C> {
    tasks: TaskList,
    /// Contents of the text input
    draft: String,
    /// Last recomputed indicator state
    progress: Progress,
    celebration: C,
}

impl<C: Celebration> TaskListController<C> {
    pub fn new(celebration: C) -> Self {
        let mut controller = Self {
            tasks: TaskList::new(),
            draft: String::new(),
            progress: Progress::default(),
            celebration,
        };
        controller.recompute_progress(true);
        controller
    }

    /// Add a task from `text`, or from the trimmed draft when `text` is
    /// missing or empty. Empty input is ignored.
    pub fn add_task(&mut self, text: Option<&str>) -> Option<TaskId> {
        let text = match text {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self.draft.trim().to_string(),
        };
        if text.is_empty() {
            log::debug!(target: "tasks", "Ignoring empty task");
            return None;
        }

        match self.create_entry(text, false, None) {
            Ok(id) => {
                self.draft.clear();
                Some(id)
            }
            Err(e) => {
                log::warn!(target: "tasks", "Task not added: {}", e);
                None
            }
        }
    }

    pub fn create_entry(&mut self, text: impl Into<String>, completed: bool, id: Option<TaskId>) -> TaskListResult<TaskId> {
        let id = self.tasks.push(text.into(), completed, id)?;
        log::debug!(target: "tasks", "Created task {} (completed={})", id, completed);
        self.recompute_progress(true);
        Ok(id)
    }

    /// Flip a task's completed state. The edit control follows it.
    pub fn toggle(&mut self, id: TaskId) -> TaskListResult<bool> {
        let completed = self.tasks.toggle(id)?;
        log::debug!(target: "tasks", "Task {} completed={}", id, completed);
        self.recompute_progress(true);
        Ok(completed)
    }

    /// Move a task's text back into the draft and remove the task.
    /// Never celebrates, even if the remaining tasks are all done.
    pub fn edit(&mut self, id: TaskId) -> TaskListResult<String> {
        let task = self.tasks.get(id).ok_or(TaskListError::NotFound(id))?;
        if !task.is_editable() {
            return Err(TaskListError::Completed(id));
        }

        let task = self.tasks.remove(id)?;
        log::debug!(target: "tasks", "Editing task {}", id);
        self.draft = task.text.clone();
        self.recompute_progress(false);
        Ok(task.text)
    }

    pub fn delete(&mut self, id: TaskId) -> TaskListResult<Task> {
        let task = self.tasks.remove(id)?;
        log::debug!(target: "tasks", "Deleted task {}", id);
        self.recompute_progress(true);
        Ok(task)
    }

    /// Refresh the indicator. With `check_completion`, a fully completed,
    /// non-empty list fires the celebration (on every call, not only on
    /// the transition).
    pub fn recompute_progress(&mut self, check_completion: bool) -> Progress {
        self.progress = self.tasks.progress();
        if check_completion && self.progress.is_complete() {
            log::info!(target: "tasks", "All {} tasks complete", self.progress.total);
            self.celebration.celebrate();
        }
        self.progress
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }
}

//! Application Context
//!
//! Shared task list state provided via Leptos Context API.

use leptos::prelude::*;

use crate::celebration::ConfettiCelebration;
use crate::controller::TaskListController;
use crate::models::{Task, TaskId};
use crate::progress::Progress;

pub type Controller = TaskListController<ConfettiCelebration>;

/// Handle to the single task list controller
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: RwSignal<Controller>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Tasks in display order
    pub fn tasks(&self) -> Vec<Task> {
        self.controller.with(|c| c.tasks().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.controller.with(|c| c.tasks().is_empty())
    }

    /// False for tasks that no longer exist
    pub fn is_completed(&self, id: TaskId) -> bool {
        self.controller.with(|c| c.task(id).map(|t| t.completed).unwrap_or(false))
    }

    pub fn progress(&self) -> Progress {
        self.controller.with(|c| c.progress())
    }

    pub fn draft(&self) -> String {
        self.controller.with(|c| c.draft().to_string())
    }

    pub fn set_draft(&self, draft: String) {
        self.controller.update(|c| c.set_draft(draft));
    }

    /// Add a task from the input field
    pub fn add_task(&self) {
        self.controller.update(|c| {
            c.add_task(None);
        });
    }

    pub fn toggle(&self, id: TaskId) {
        self.controller.update(|c| {
            if let Err(e) = c.toggle(id) {
                log::debug!(target: "tasks", "Toggle ignored: {}", e);
            }
        });
    }

    pub fn edit(&self, id: TaskId) {
        self.controller.update(|c| {
            if let Err(e) = c.edit(id) {
                log::debug!(target: "tasks", "Edit ignored: {}", e);
            }
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.controller.update(|c| {
            if let Err(e) = c.delete(id) {
                log::debug!(target: "tasks", "Delete ignored: {}", e);
            }
        });
    }
}

//! UI Components
//!
//! Leptos components for the task list.

mod new_task_form;
mod progress_bar;
mod task_entry;
mod task_list_view;

pub use new_task_form::NewTaskForm;
pub use progress_bar::ProgressBar;
pub use task_entry::TaskEntry;
pub use task_list_view::TaskListView;

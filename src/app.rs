//! Task List App
//!
//! Root component: builds the controller once and provides it to the tree.

use leptos::prelude::*;

use crate::celebration::ConfettiCelebration;
use crate::components::{NewTaskForm, ProgressBar, TaskListView};
use crate::context::AppContext;
use crate::controller::TaskListController;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(TaskListController::new(ConfettiCelebration)));

    view! {
        <div class="container">
            <div class="task-space">
                <div class="details">
                    <h1>"Todo List"</h1>
                    <p>"Keep it up!"</p>
                </div>
                <ProgressBar />
                <NewTaskForm />
                <TaskListView />
            </div>
        </div>
    }
}

//! Task List View Component
//!
//! Renders the task entries in order. The list container always stays
//! in the DOM; an empty-state hint is shown next to it when there are no tasks.

use leptos::prelude::*;

use crate::components::TaskEntry;
use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <Show when=move || ctx.is_empty()>
            <div class="empty-state">
                <p>"No tasks yet. Add one above!"</p>
            </div>
        </Show>
        <ul id="task-list">
            <For
                each=move || ctx.tasks()
                key=|task| task.id
                children=move |task: Task| view! { <TaskEntry task=task /> }
            />
        </ul>
    }
}

//! Task Entry Component
//!
//! A single task row: checkbox, label, edit and delete buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskEntry(task: Task) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let id = task.id;
    let completed = move || ctx.is_completed(id);

    view! {
        <li class=move || if completed() { "completed" } else { "" } data-id=id.to_string()>
            <input
                type="checkbox"
                class="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id)
            />
            <span>{task.text}</span>
            <div class="task-btns">
                // Edit is locked while the task is completed
                <button
                    class="edit-btn"
                    prop:disabled=completed
                    style:opacity=move || if completed() { "0.5" } else { "1" }
                    on:click=move |_| ctx.edit(id)
                >
                    <i class="fa-solid fa-pen"></i>
                </button>
                <button class="delete-btn" on:click=move |_| ctx.delete(id)>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </div>
        </li>
    }
}

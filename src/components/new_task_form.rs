//! New Task Form Component
//!
//! Text input plus add button. Enter in the input submits the form.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_task();
    };

    view! {
        <form class="input-area" on:submit=add_task>
            <input
                type="text"
                id="input-text"
                placeholder="Add a new task..."
                autocomplete="off"
                prop:value=move || ctx.draft()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit" id="add-btn">
                <i class="fa-solid fa-plus"></i>
            </button>
        </form>
    }
}

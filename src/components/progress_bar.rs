//! Progress Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Completion bar and "done/total" counter
#[component]
pub fn ProgressBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="stats-container">
            <div class="progress-bar">
                <div id="progress" style:width=move || ctx.progress().fill_width()></div>
            </div>
            <div class="stats-numbers">
                <p id="nums">{move || ctx.progress().label()}</p>
            </div>
        </div>
    }
}

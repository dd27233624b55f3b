//! New Task Form Component
//!
//! "Add New Task" card. Enter in the input submits the form.

use leptos::prelude::*;

use crate::store::{use_app_store, store_draft, store_set_draft, store_submit_draft};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_draft(&store);
    };

    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">"+ Add New Task"</h2>
            </header>
            <form class="card-content new-task-form" on:submit=submit>
                <input
                    type="text"
                    class="new-task-input"
                    placeholder="Enter a new task..."
                    prop:value=move || store_draft(&store)
                    on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                />
                <button type="submit" class="add-btn">"Add Task"</button>
            </form>
        </section>
    }
}

//! Task Panel Component
//!
//! Card listing one group of tasks with a live count.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::groups::TaskGroup;
use crate::store::{use_app_store, store_group_memo};

#[component]
pub fn TaskPanel(group: TaskGroup) -> impl IntoView {
    let store = use_app_store();
    let tasks = store_group_memo(store, group);
    let count = move || tasks.with(Vec::len);

    view! {
        <section class="card">
            <header class="card-header">
                <h2 class=group.accent_class()>{move || group.title(count())}</h2>
            </header>
            <div class="card-content">
                <Show
                    when=move || { count() > 0 }
                    fallback=move || view! { <p class="empty-placeholder">{group.placeholder()}</p> }
                >
                    <div class="task-list">
                        <For
                            each=move || tasks.get()
                            // Text is part of the key so a saved edit re-renders the row
                            key=|task| (task.id, task.text.clone(), task.completed)
                            children=move |task| view! { <TaskRow task=task /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

//! Task List App
//!
//! Header, add form and the active/completed panels.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskPanel};
use crate::config::initial_task_list;
use crate::groups::TaskGroup;
use crate::store::provide_app_store;

#[component]
pub fn App() -> impl IntoView {
    provide_app_store(initial_task_list());

    view! {
        <div class="app-layout">
            <nav class="navbar">
                <h1>"My Todo List"</h1>
            </nav>

            <main class="main-content">
                <NewTaskForm />
                <TaskPanel group=TaskGroup::Active />
                <TaskPanel group=TaskGroup::Completed />
            </main>
        </div>
    }
}

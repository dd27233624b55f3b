//! Task Row Component
//!
//! One task: checkbox, text and edit/delete actions, or the inline
//! editor while the task is being edited.

use leptos::html;
use leptos::prelude::*;
use task_store::Task;

use crate::keys::KeyIntent;
use crate::store::{
    use_app_store, store_cancel_edit, store_delete, store_editing_text, store_is_editing,
    store_save_edit, store_start_edit, store_toggle, store_update_edit_buffer,
};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let text = task.text;
    let row_class = if completed { "task-row completed" } else { "task-row" };
    let text_class = if completed { "task-text completed" } else { "task-text" };

    let display = move || {
        let edit_text = text.clone();
        view! {
            <div class="task-body">
                <span class=text_class>
                    {text.clone()}
                </span>
                <div class="task-actions">
                    <button
                        class="edit-btn"
                        title="Edit"
                        on:click=move |_| store_start_edit(&store, id, edit_text.clone())
                    >
                        "✎"
                    </button>
                    <button
                        class="delete-btn"
                        title="Delete"
                        on:click=move |_| store_delete(&store, id)
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                class="task-check"
                checked=completed
                on:change=move |_| store_toggle(&store, id)
            />
            <Show when=move || store_is_editing(&store, id) fallback=display>
                <TaskEditor />
            </Show>
        </div>
    }
}

/// Inline editor bound to the edit session buffer
#[component]
fn TaskEditor() -> impl IntoView {
    let store = use_app_store();
    let input_ref = NodeRef::<html::Input>::new();

    // Focus on open
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match KeyIntent::from_key(&ev.key()) {
        Some(KeyIntent::Accept) => store_save_edit(&store),
        Some(KeyIntent::Cancel) => store_cancel_edit(&store),
        None => {}
    };

    view! {
        <div class="task-editor">
            <input
                type="text"
                class="edit-input"
                node_ref=input_ref
                prop:value=move || store_editing_text(&store)
                on:input=move |ev| store_update_edit_buffer(&store, event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="save-btn" title="Save" on:click=move |_| store_save_edit(&store)>
                "💾"
            </button>
            <button class="cancel-btn" title="Cancel" on:click=move |_| store_cancel_edit(&store)>
                "✗"
            </button>
        </div>
    }
}

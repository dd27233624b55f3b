//! Global Application State Store
//!
//! Uses Leptos reactive_stores so every store operation re-renders
//! the views that read the task list.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{Task, TaskList};

use crate::groups::TaskGroup;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks, add-input draft and edit session
    pub list: TaskList,
}

impl AppState {
    pub fn new(list: TaskList) -> Self {
        Self { list }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Create the store and provide it to all children
pub fn provide_app_store(list: TaskList) -> AppStore {
    let store = Store::new(AppState::new(list));
    provide_context(store);
    store
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reads (tracked)
// ========================

/// Tasks of one group, in sequence order
pub fn store_tasks_in(store: &AppStore, group: TaskGroup) -> Vec<Task> {
    group.select(&store.list().read())
}

/// Memoized group selection. Draft and edit-buffer writes leave it equal,
/// so the panel reading it does not re-render while typing.
pub fn store_group_memo(store: AppStore, group: TaskGroup) -> Memo<Vec<Task>> {
    Memo::new(move |_| store_tasks_in(&store, group))
}

pub fn store_draft(store: &AppStore) -> String {
    store.list().read().draft().to_string()
}

pub fn store_is_editing(store: &AppStore, task_id: u32) -> bool {
    store.list().read().is_editing(task_id)
}

pub fn store_editing_text(store: &AppStore) -> String {
    store.list().read()
        .editing()
        .map(|session| session.editing_text.clone())
        .unwrap_or_default()
}

// ========================
// Operations
// ========================

pub fn store_set_draft(store: &AppStore, text: String) {
    store.list().write().set_draft(text);
}

/// Add the draft as a new task (Enter or "Add Task")
pub fn store_submit_draft(store: &AppStore) {
    store.list().write().submit_draft();
}

pub fn store_toggle(store: &AppStore, task_id: u32) {
    store.list().write().toggle(task_id);
}

pub fn store_delete(store: &AppStore, task_id: u32) {
    store.list().write().delete(task_id);
}

pub fn store_start_edit(store: &AppStore, task_id: u32, current_text: String) {
    store.list().write().start_edit(task_id, current_text);
}

pub fn store_update_edit_buffer(store: &AppStore, text: String) {
    store.list().write().update_edit_buffer(text);
}

pub fn store_save_edit(store: &AppStore) {
    store.list().write().save_edit();
}

pub fn store_cancel_edit(store: &AppStore) {
    store.list().write().cancel_edit();
}

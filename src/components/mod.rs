//! UI Components
//!
//! Leptos components for the task list page.

mod new_task_form;
mod task_panel;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use task_panel::TaskPanel;
pub use task_row::TaskRow;

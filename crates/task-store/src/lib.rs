//! Task Store
//!
//! In-memory task list state and its transitions.
//! This crate has NO UI dependencies; the frontend wraps it in a reactive store.

mod entity;
mod task;
mod edit;
mod task_list;
mod seed;


pub use entity::{Entity, DomainError, DomainResult};
pub use task::Task;
pub use edit::EditSession;
pub use task_list::TaskList;
pub use seed::{default_seed, parse_seed};

//! Seed List
//!
//! The tasks a fresh store starts with, and validation for seeds
//! supplied as JSON.

use std::collections::HashSet;

use crate::entity::{DomainError, DomainResult, Entity};
use crate::task::Task;
use crate::task_list::TaskList;

/// Built-in starting tasks
pub fn default_seed() -> Vec<Task> {
    vec![
        Task::new(1, "Learn React"),
        Task::new(2, "Build a todo app"),
        Task::done(3, "Master Tailwind CSS"),
    ]
}

/// Parse a JSON array of tasks, enforcing the store invariants.
/// Texts are stored trimmed.
pub fn parse_seed(json: &str) -> DomainResult<Vec<Task>> {
    let mut tasks: Vec<Task> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for task in &mut tasks {
        let trimmed = task.text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput(format!("task {} has blank text", task.id())));
        }
        task.text = trimmed.to_string();
        if !seen.insert(task.id()) {
            return Err(DomainError::Conflict(format!("duplicate task id {}", task.id())));
        }
    }
    Ok(tasks)
}

impl TaskList {
    /// Store holding the built-in seed
    pub fn seeded() -> Self {
        Self::new(default_seed())
    }

    pub fn from_seed_json(json: &str) -> DomainResult<Self> {
        parse_seed(json).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let list = TaskList::seeded();
        assert_eq!(list.len(), 3);
        assert_eq!(list.counts(), (2, 1));
        assert_eq!(list.next_id(), Some(4));
    }

    #[test]
    fn test_parse_seed_trims_text() {
        let tasks = parse_seed(r#"[{"id": 1, "text": "  Learn Rust ", "completed": true}]"#).unwrap();
        assert_eq!(tasks, vec![Task::done(1, "Learn Rust")]);
    }

    #[test]
    fn test_parse_seed_rejects_blank_text() {
        let err = parse_seed(r#"[{"id": 1, "text": "   "}]"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_seed_rejects_duplicate_ids() {
        let err = parse_seed(r#"[{"id": 1, "text": "A"}, {"id": 1, "text": "B"}]"#).unwrap_err();
        assert_eq!(err, DomainError::Conflict("duplicate task id 1".to_string()));
    }

    #[test]
    fn test_parse_seed_rejects_malformed_json() {
        let err = TaskList::from_seed_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid input:"));
    }

    #[test]
    fn test_seed_with_max_id_does_not_panic_on_add() {
        let mut list = TaskList::from_seed_json(r#"[{"id": 4294967295, "text": "A"}]"#).unwrap();
        assert_eq!(list.add("B"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_seed() {
        let list = TaskList::from_seed_json("[]").unwrap();
        assert!(list.is_empty());
    }
}

//! Task Entity
//!
//! One user-entered to-do item.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the store, assigned as max + 1
    pub id: u32,
    /// Never empty after trim once stored
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Create a task that is already completed
    pub fn done(id: u32, text: impl Into<String>) -> Self {
        Self {
            completed: true,
            ..Self::new(id, text)
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

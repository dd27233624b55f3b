//! Task Groups
//!
//! The two fixed panels and the text they show.

use task_store::{Task, TaskList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskGroup {
    Active,
    Completed,
}

impl TaskGroup {
    pub fn label(self) -> &'static str {
        match self {
            TaskGroup::Active => "My Todo List",
            TaskGroup::Completed => "All I Finished",
        }
    }

    /// Shown when the group has no tasks
    pub fn placeholder(self) -> &'static str {
        match self {
            TaskGroup::Active => "No active tasks. Add one above!",
            TaskGroup::Completed => "No completed tasks yet. Keep working!",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            TaskGroup::Active => "card-title accent-active",
            TaskGroup::Completed => "card-title accent-completed",
        }
    }

    pub fn title(self, count: usize) -> String {
        format!("{} ({} tasks)", self.label(), count)
    }

    pub fn select(self, list: &TaskList) -> Vec<Task> {
        let tasks = match self {
            TaskGroup::Active => list.active_tasks(),
            TaskGroup::Completed => list.completed_tasks(),
        };
        tasks.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(TaskGroup::Active.title(3), "My Todo List (3 tasks)");
        assert_eq!(TaskGroup::Completed.title(0), "All I Finished (0 tasks)");
    }

    #[test]
    fn test_select_follows_toggle() {
        let mut list = TaskList::seeded();
        list.toggle(1);

        let completed: Vec<u32> = TaskGroup::Completed.select(&list).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![1, 3]);
        assert_eq!(TaskGroup::Active.select(&list).len(), 1);
    }

    #[test]
    fn test_select_ignores_draft_and_edit_buffer() {
        let mut list = TaskList::seeded();
        let active = TaskGroup::Active.select(&list);
        list.set_draft("Ship it");
        list.start_edit(2, "Build a todo app");
        list.update_edit_buffer("Build");
        assert_eq!(TaskGroup::Active.select(&list), active);
    }
}

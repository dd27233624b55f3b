//! Task List Store
//!
//! Owns the task sequence, the pending add-input draft and the edit session.
//! Every operation is synchronous and total: invalid input (blank text,
//! unknown id) is a silent no-op. Operations report whether anything changed,
//! and each change bumps `revision`.

use tracing::{debug, trace};

use crate::edit::EditSession;
use crate::entity::Entity;
use crate::task::Task;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    draft: String,
    editing: Option<EditSession>,
    revision: u64,
}

impl TaskList {
    /// Create a store holding `tasks` in the given order
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }

    // ========================
    // Read Access
    // ========================

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.editing.as_ref().is_some_and(|s| s.editing_id == id)
    }

    /// Number of state-changing operations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================
    // Derived Views
    // ========================

    /// Tasks with `completed == false`, in sequence order
    pub fn active_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_active()).collect()
    }

    /// Tasks with `completed == true`, in sequence order
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    /// (active, completed)
    pub fn counts(&self) -> (usize, usize) {
        let active = self.tasks.iter().filter(|task| task.is_active()).count();
        (active, self.tasks.len() - active)
    }

    /// Id the next successful add will receive, or None once `u32::MAX` is taken
    pub fn next_id(&self) -> Option<u32> {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0).checked_add(1)
    }

    // ========================
    // Task Operations
    // ========================

    /// Append a task with the trimmed text. Returns the new id, or None for blank input.
    pub fn add(&mut self, raw: &str) -> Option<u32> {
        let text = raw.trim();
        if text.is_empty() {
            trace!("add ignored: blank text");
            return None;
        }
        let Some(id) = self.next_id() else {
            trace!("add ignored: id space exhausted");
            return None;
        };
        self.tasks.push(Task::new(id, text));
        self.bump();
        debug!(id, "added task");
        Some(id)
    }

    /// Flip the completion flag of task `id`
    pub fn toggle(&mut self, id: u32) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            trace!(id, "toggle ignored: no such task");
            return false;
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.bump();
        debug!(id, completed, "toggled task");
        true
    }

    /// Remove task `id`, keeping the order of the rest
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            trace!(id, "delete ignored: no such task");
            return false;
        }
        self.bump();
        debug!(id, "deleted task");
        true
    }

    // ========================
    // Draft (add input buffer)
    // ========================

    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.draft == text {
            return false;
        }
        self.draft = text;
        self.bump();
        true
    }

    /// Add the draft as a task; the draft is cleared only when the add succeeds
    pub fn submit_draft(&mut self) -> Option<u32> {
        let draft = std::mem::take(&mut self.draft);
        let added = self.add(&draft);
        if added.is_none() {
            self.draft = draft;
        }
        added
    }

    // ========================
    // Edit Session
    // ========================

    /// Begin editing `id`, replacing any unsaved session
    pub fn start_edit(&mut self, id: u32, current_text: impl Into<String>) -> bool {
        let session = EditSession::new(id, current_text);
        if let Some(prev) = self.editing.as_ref().filter(|prev| prev.editing_id != id) {
            debug!(discarded = prev.editing_id, "dropping unsaved edit session");
        }
        if self.editing.as_ref() == Some(&session) {
            return false;
        }
        self.editing = Some(session);
        self.bump();
        debug!(id, "started editing");
        true
    }

    pub fn update_edit_buffer(&mut self, text: impl Into<String>) -> bool {
        let Some(session) = self.editing.as_mut() else {
            trace!("edit buffer update ignored: not editing");
            return false;
        };
        let text = text.into();
        if session.editing_text == text {
            return false;
        }
        session.editing_text = text;
        self.bump();
        true
    }

    /// Commit the edit buffer. A buffer that trims to empty is discarded and
    /// the task keeps its text. The session is cleared either way.
    pub fn save_edit(&mut self) -> bool {
        let Some(session) = self.editing.take() else {
            trace!("save ignored: not editing");
            return false;
        };
        let id = session.editing_id;
        match session.committed_text() {
            Some(text) => match self.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    task.text = text.to_string();
                    debug!(id, "saved edit");
                }
                None => debug!(id, "edited task no longer exists"),
            },
            None => debug!(id, "blank edit discarded"),
        }
        self.bump();
        true
    }

    /// Drop the edit session without touching any task
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(session) => {
                self.bump();
                debug!(id = session.editing_id, "cancelled edit");
                true
            }
            None => false,
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

//! Edit Session
//!
//! Transient state for the task currently being edited.

/// The one in-progress edit, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Task under edit
    pub editing_id: u32,
    /// Working copy of the text
    pub editing_text: String,
}

impl EditSession {
    pub fn new(editing_id: u32, editing_text: impl Into<String>) -> Self {
        Self {
            editing_id,
            editing_text: editing_text.into(),
        }
    }

    /// Trimmed buffer, or None when it would blank the task
    pub fn committed_text(&self) -> Option<&str> {
        let trimmed = self.editing_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

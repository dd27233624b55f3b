//! Keyboard Shortcuts
//!
//! Maps `KeyboardEvent.key` values to task list intents.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Submit the add input or save the edit
    Accept,
    /// Abandon the edit
    Cancel,
}

impl KeyIntent {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(KeyIntent::Accept),
            "Escape" | "Esc" => Some(KeyIntent::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyIntent::from_key("Enter"), Some(KeyIntent::Accept));
        assert_eq!(KeyIntent::from_key("Escape"), Some(KeyIntent::Cancel));
        assert_eq!(KeyIntent::from_key("a"), None);
        assert_eq!(KeyIntent::from_key("enter"), None);
    }
}

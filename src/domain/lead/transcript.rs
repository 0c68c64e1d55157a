//! Ordered conversation transcript.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only list of turns in conversation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.0.push(Turn::user(content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.0.push(Turn::assistant(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }

    /// Number of turns the visitor has sent.
    pub fn user_turn_count(&self) -> usize {
        self.0.iter().filter(|t| t.role == Role::User).count()
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_assistant("hello");
        transcript.push_user("hi");
        transcript.push_assistant("what unit?");

        let contents: Vec<&str> = transcript.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["hello", "hi", "what unit?"]);
        assert_eq!(transcript.user_turn_count(), 1);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut transcript = Transcript::new();
        transcript.push_user("Rent");
        let json = serde_json::to_string(&transcript).unwrap();
        assert_eq!(json, r#"[{"role":"user","content":"Rent"}]"#);
    }

    #[test]
    fn deserializes_existing_rows() {
        let json = r#"[{"role":"assistant","content":"Welcome"},{"role":"user","content":"Yes"}]"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last(), Some(&Turn::user("Yes")));
    }
}

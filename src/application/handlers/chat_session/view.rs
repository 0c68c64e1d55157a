//! What a browser sees of its chat session after each operation.

use crate::domain::conversation::{PromptBook, SessionContext};
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::Role;

/// Snapshot of a session: its token, the context and the quick replies for
/// the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session_id: ChatSessionId,
    pub context: SessionContext,
    pub suggestions: Vec<String>,
}

impl SessionView {
    pub fn new(session_id: ChatSessionId, context: SessionContext, prompts: &PromptBook) -> Self {
        let suggestions = context.suggestions(prompts);
        Self {
            session_id,
            context,
            suggestions,
        }
    }

    /// The most recent assistant message.
    pub fn reply(&self) -> Option<&str> {
        self.context
            .transcript()
            .turns()
            .iter()
            .rev()
            .find(|turn| turn.role == Role::Assistant)
            .map(|turn| turn.content.as_str())
    }
}

//! HandleTurnHandler - Processes one visitor message.

use std::sync::Arc;

use tracing::{debug, error};

use crate::application::{PreferenceExtractor, SessionRegistry};
use crate::domain::conversation::{next_step, PromptBook};
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;
use crate::ports::LeadRepository;

use super::SessionView;

/// Command carrying one visitor utterance.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub session_id: ChatSessionId,
    pub utterance: String,
}

/// Handler for a single conversation turn.
///
/// The turn:
/// 1. Extracts preferences against the step being answered
/// 2. Picks the next step
/// 3. Appends the visitor message and the next prompt
/// 4. Persists transcript, preferences and step in one write
///
/// The session's context is replaced only after the write succeeds, so a
/// failed turn can be retried as-is.
pub struct HandleTurnHandler {
    repository: Arc<dyn LeadRepository>,
    registry: Arc<SessionRegistry>,
    extractor: PreferenceExtractor,
    prompts: PromptBook,
}

impl HandleTurnHandler {
    pub fn new(
        repository: Arc<dyn LeadRepository>,
        registry: Arc<SessionRegistry>,
        extractor: PreferenceExtractor,
        prompts: PromptBook,
    ) -> Self {
        Self {
            repository,
            registry,
            extractor,
            prompts,
        }
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<SessionView, LeadError> {
        if cmd.utterance.trim().is_empty() {
            return Err(LeadError::validation("message", "Message cannot be empty"));
        }

        let handle = self.registry.require(&cmd.session_id).await?;
        let mut context = handle.lock().await;

        let answering = context.step();
        let preferences = self
            .extractor
            .extract(&cmd.utterance, context.preferences(), answering)
            .await;
        let step = next_step(&preferences, &cmd.utterance, answering);
        let reply = self
            .prompts
            .prompt(step, &preferences, context.registration().name());
        let next = context.advance(&cmd.utterance, preferences, step, &reply);

        if let Err(e) = self
            .repository
            .update_conversation(next.lead_id(), next.transcript(), next.preferences(), step)
            .await
        {
            error!(lead_id = %next.lead_id(), error = %e, "Failed to save turn");
            return Err(e.into());
        }

        debug!(lead_id = %next.lead_id(), from = %answering, to = %step, "Turn handled");
        *context = next.clone();
        Ok(SessionView::new(cmd.session_id, next, &self.prompts))
    }
}

//! LoadSessionHandler - Resumes a saved lead in an open session.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionRegistry;
use crate::domain::conversation::{PromptBook, SessionContext};
use crate::domain::foundation::{ChatSessionId, LeadId};
use crate::domain::lead::LeadError;
use crate::ports::LeadRepository;

use super::SessionView;

/// Command to switch the session to a saved lead.
#[derive(Debug, Clone)]
pub struct LoadSessionCommand {
    pub session_id: ChatSessionId,
    pub lead_id: LeadId,
}

/// Handler for the session picker.
///
/// Only leads registered under the session's email can be loaded; any
/// other lead is reported as not found.
pub struct LoadSessionHandler {
    repository: Arc<dyn LeadRepository>,
    registry: Arc<SessionRegistry>,
    prompts: PromptBook,
}

impl LoadSessionHandler {
    pub fn new(
        repository: Arc<dyn LeadRepository>,
        registry: Arc<SessionRegistry>,
        prompts: PromptBook,
    ) -> Self {
        Self {
            repository,
            registry,
            prompts,
        }
    }

    pub async fn handle(&self, cmd: LoadSessionCommand) -> Result<SessionView, LeadError> {
        let handle = self.registry.require(&cmd.session_id).await?;
        let mut context = handle.lock().await;

        let lead = self
            .repository
            .find_by_id(cmd.lead_id)
            .await?
            .filter(|lead| lead.registration().email() == context.registration().email())
            .ok_or_else(|| LeadError::not_found(cmd.lead_id))?;

        let next = SessionContext::resume(&lead, &self.prompts);

        info!(session_id = %cmd.session_id, lead_id = %cmd.lead_id, "Loaded saved chat");
        *context = next.clone();
        Ok(SessionView::new(cmd.session_id, next, &self.prompts))
    }
}

//! StartNewSessionHandler - Starts a fresh lead for the same visitor.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionRegistry;
use crate::domain::conversation::{PromptBook, SessionContext};
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;
use crate::ports::LeadRepository;

use super::SessionView;

/// Command to begin a new chat within an open session.
#[derive(Debug, Clone)]
pub struct StartNewSessionCommand {
    pub session_id: ChatSessionId,
}

/// Handler that creates a new lead with the session's registration and
/// makes it the active one. The previous lead stays saved.
pub struct StartNewSessionHandler {
    repository: Arc<dyn LeadRepository>,
    registry: Arc<SessionRegistry>,
    prompts: PromptBook,
}

impl StartNewSessionHandler {
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

    pub async fn handle(&self, cmd: StartNewSessionCommand) -> Result<SessionView, LeadError> {
        let handle = self.registry.require(&cmd.session_id).await?;
        let mut context = handle.lock().await;

        let registration = context.registration().clone();
        let lead_id = self.repository.create(&registration).await?;
        let next = SessionContext::start(lead_id, registration, &self.prompts);

        info!(session_id = %cmd.session_id, previous = %context.lead_id(), %lead_id, "Started new chat");
        *context = next.clone();
        Ok(SessionView::new(cmd.session_id, next, &self.prompts))
    }
}

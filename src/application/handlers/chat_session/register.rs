//! RegisterHandler - Opens a chat session for a new visitor.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionRegistry;
use crate::domain::conversation::{PromptBook, SessionContext};
use crate::domain::lead::{LeadError, Registration};
use crate::ports::LeadRepository;

use super::SessionView;

/// Command to register a visitor.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Handler for visitor registration.
///
/// Creates the lead row and opens a session whose transcript holds the
/// greeting. The greeting is persisted together with the first turn.
pub struct RegisterHandler {
    repository: Arc<dyn LeadRepository>,
    registry: Arc<SessionRegistry>,
    prompts: PromptBook,
}

impl RegisterHandler {
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

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<SessionView, LeadError> {
        let registration = Registration::new(&cmd.name, &cmd.email, &cmd.mobile)?;

        let lead_id = self.repository.create(&registration).await?;
        let context = SessionContext::start(lead_id, registration, &self.prompts);
        let session_id = self.registry.open(context.clone()).await;

        info!(%session_id, %lead_id, "Visitor registered");
        Ok(SessionView::new(session_id, context, &self.prompts))
    }
}

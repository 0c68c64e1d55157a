//! ListSessionsHandler - Saved leads for the session's visitor.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;
use crate::ports::{LeadRepository, LeadSummary};

/// Query for the session picker.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub session_id: ChatSessionId,
}

/// Handler listing every lead with the session's email, newest first.
pub struct ListSessionsHandler {
    repository: Arc<dyn LeadRepository>,
    registry: Arc<SessionRegistry>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn LeadRepository>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            repository,
            registry,
        }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<LeadSummary>, LeadError> {
        let handle = self.registry.require(&query.session_id).await?;
        let email = handle.lock().await.registration().email().to_string();
        Ok(self.repository.list_by_email(&email).await?)
    }
}

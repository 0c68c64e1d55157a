//! GetSessionStateHandler - Query for the current state of a chat session.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::conversation::PromptBook;
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;

use super::SessionView;

/// Query for one session's state.
#[derive(Debug, Clone)]
pub struct GetSessionStateQuery {
    pub session_id: ChatSessionId,
}

/// Handler for reading a session without changing it.
pub struct GetSessionStateHandler {
    registry: Arc<SessionRegistry>,
    prompts: PromptBook,
}

impl GetSessionStateHandler {
    pub fn new(registry: Arc<SessionRegistry>, prompts: PromptBook) -> Self {
        Self { registry, prompts }
    }

    pub async fn handle(&self, query: GetSessionStateQuery) -> Result<SessionView, LeadError> {
        let handle = self.registry.require(&query.session_id).await?;
        let context = handle.lock().await.clone();
        Ok(SessionView::new(query.session_id, context, &self.prompts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::SessionContext;
    use crate::domain::foundation::LeadId;
    use crate::domain::lead::Registration;

    #[tokio::test]
    async fn returns_open_session() {
        let registry = Arc::new(SessionRegistry::default());
        let registration = Registration::new("Rami", "rami@example.com", "0501112222").unwrap();
        let context = SessionContext::start(LeadId::new(9), registration, &PromptBook::default());
        let session_id = registry.open(context.clone()).await;
        let handler = GetSessionStateHandler::new(registry, PromptBook::default());

        let view = handler
            .handle(GetSessionStateQuery { session_id })
            .await
            .unwrap();

        assert_eq!(view.context, context);
        assert_eq!(view.suggestions.len(), 2);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler =
            GetSessionStateHandler::new(Arc::new(SessionRegistry::default()), PromptBook::default());
        let err = handler
            .handle(GetSessionStateQuery {
                session_id: ChatSessionId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LeadError::ChatSessionNotFound(_)));
    }
}

//! LogoutHandler - Closes a chat session.

use std::sync::Arc;

use tracing::info;

use crate::application::SessionRegistry;
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;

/// Command to close a session.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub session_id: ChatSessionId,
}

/// Handler that forgets a session. Saved leads are untouched.
pub struct LogoutHandler {
    registry: Arc<SessionRegistry>,
}

impl LogoutHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<(), LeadError> {
        if !self.registry.close(&cmd.session_id).await {
            return Err(LeadError::chat_session_not_found(cmd.session_id));
        }
        info!(session_id = %cmd.session_id, "Visitor logged out");
        Ok(())
    }
}

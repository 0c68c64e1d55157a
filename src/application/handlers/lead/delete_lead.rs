//! DeleteLeadHandler - Removes a lead from the store.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::LeadId;
use crate::domain::lead::LeadError;
use crate::ports::LeadRepository;

/// Command to delete a lead.
#[derive(Debug, Clone)]
pub struct DeleteLeadCommand {
    pub lead_id: LeadId,
}

/// Handler for lead deletion. Deleting a missing lead succeeds.
///
/// A browser session whose active lead is deleted stays open; its next
/// turn fails with `NotFound`.
pub struct DeleteLeadHandler {
    repository: Arc<dyn LeadRepository>,
}

impl DeleteLeadHandler {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteLeadCommand) -> Result<(), LeadError> {
        self.repository.delete(cmd.lead_id).await?;
        info!(lead_id = %cmd.lead_id, "Lead deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLeadRepository;
    use crate::domain::lead::Registration;

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryLeadRepository::new();
        let id = repo
            .create(&Registration::new("Faris", "faris@example.com", "0503030303").unwrap())
            .await
            .unwrap();
        let handler = DeleteLeadHandler::new(Arc::new(repo.clone()));

        handler.handle(DeleteLeadCommand { lead_id: id }).await.unwrap();
        handler.handle(DeleteLeadCommand { lead_id: id }).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.list_by_email("faris@example.com").await.unwrap().is_empty());
    }
}

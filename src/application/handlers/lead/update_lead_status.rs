//! UpdateLeadStatusHandler - Operator follow-up status changes.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{LeadId, LeadStatus};
use crate::domain::lead::LeadError;
use crate::ports::LeadRepository;

/// Command to set a lead's status.
#[derive(Debug, Clone)]
pub struct UpdateLeadStatusCommand {
    pub lead_id: LeadId,
    pub status: LeadStatus,
}

/// Handler for the status dropdown. Any status may follow any other.
pub struct UpdateLeadStatusHandler {
    repository: Arc<dyn LeadRepository>,
}

impl UpdateLeadStatusHandler {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateLeadStatusCommand) -> Result<(), LeadError> {
        self.repository.update_status(cmd.lead_id, cmd.status).await?;
        info!(lead_id = %cmd.lead_id, status = %cmd.status, "Lead status updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLeadRepository;
    use crate::domain::lead::Registration;

    #[tokio::test]
    async fn status_changes_in_any_direction() {
        let repo = InMemoryLeadRepository::new();
        let id = repo
            .create(&Registration::new("Huda", "huda@example.com", "0502020202").unwrap())
            .await
            .unwrap();
        let handler = UpdateLeadStatusHandler::new(Arc::new(repo.clone()));

        for status in [LeadStatus::Success, LeadStatus::Pending, LeadStatus::AgentTalking] {
            handler
                .handle(UpdateLeadStatusCommand { lead_id: id, status })
                .await
                .unwrap();
            let lead = repo.find_by_id(id).await.unwrap().unwrap();
            assert_eq!(lead.status(), status);
        }
    }

    #[tokio::test]
    async fn missing_lead_is_not_found() {
        let handler = UpdateLeadStatusHandler::new(Arc::new(InMemoryLeadRepository::new()));
        let err = handler
            .handle(UpdateLeadStatusCommand {
                lead_id: LeadId::new(8),
                status: LeadStatus::Unsuccessful,
            })
            .await
            .unwrap_err();
        assert_eq!(err, LeadError::NotFound(LeadId::new(8)));
    }
}

//! GetLeadHandler - Query handler for a single lead.

use std::sync::Arc;

use crate::domain::foundation::LeadId;
use crate::domain::lead::{Lead, LeadError};
use crate::ports::LeadRepository;

/// Query to fetch a lead.
#[derive(Debug, Clone)]
pub struct GetLeadQuery {
    pub lead_id: LeadId,
}

/// Handler for reading one lead.
pub struct GetLeadHandler {
    repository: Arc<dyn LeadRepository>,
}

impl GetLeadHandler {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetLeadQuery) -> Result<Lead, LeadError> {
        self.repository
            .find_by_id(query.lead_id)
            .await?
            .ok_or_else(|| LeadError::not_found(query.lead_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLeadRepository;
    use crate::domain::lead::Registration;

    #[tokio::test]
    async fn returns_stored_lead() {
        let repo = InMemoryLeadRepository::new();
        let id = repo
            .create(&Registration::new("Adel", "adel@example.com", "0501010101").unwrap())
            .await
            .unwrap();
        let handler = GetLeadHandler::new(Arc::new(repo));

        let lead = handler.handle(GetLeadQuery { lead_id: id }).await.unwrap();
        assert_eq!(lead.id(), id);
        assert_eq!(lead.description(), "New Lead / Browsing");
    }

    #[tokio::test]
    async fn missing_lead_is_not_found() {
        let handler = GetLeadHandler::new(Arc::new(InMemoryLeadRepository::new()));
        let err = handler
            .handle(GetLeadQuery {
                lead_id: LeadId::new(5),
            })
            .await
            .unwrap_err();
        assert_eq!(err, LeadError::NotFound(LeadId::new(5)));
    }
}

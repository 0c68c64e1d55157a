//! In-Memory Lead Repository Adapter
//!
//! Stores leads in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationStep;
use crate::domain::foundation::{DomainError, LeadId, LeadStatus, Timestamp};
use crate::domain::lead::{lead_not_found, Lead, Preferences, Registration, Transcript};
use crate::ports::{LeadRepository, LeadSummary};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<LeadId, Lead>,
    last_id: i64,
}

/// In-memory lead table
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    table: Arc<RwLock<Table>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryLeadRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `DatabaseError` (for tests)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of stored leads
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns true if no leads are stored
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::database("Simulated write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn create(&self, registration: &Registration) -> Result<LeadId, DomainError> {
        self.check_writable()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = LeadId::new(table.last_id);
        table
            .rows
            .insert(id, Lead::new(id, registration.clone(), Timestamp::now()));
        Ok(id)
    }

    async fn update_conversation(
        &self,
        id: LeadId,
        transcript: &Transcript,
        preferences: &Preferences,
        step: ConversationStep,
    ) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut table = self.table.write().await;
        let lead = table.rows.get_mut(&id).ok_or_else(|| lead_not_found(id))?;
        lead.record_conversation(transcript.clone(), preferences.clone(), step);
        Ok(())
    }

    async fn update_status(&self, id: LeadId, status: LeadStatus) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut table = self.table.write().await;
        let lead = table.rows.get_mut(&id).ok_or_else(|| lead_not_found(id))?;
        lead.set_status(status);
        Ok(())
    }

    async fn delete(&self, id: LeadId) -> Result<(), DomainError> {
        self.check_writable()?;
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<LeadSummary>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|lead| lead.registration().email() == email)
            .map(|lead| LeadSummary {
                id: lead.id(),
                timestamp: lead.created_at(),
                status: lead.status(),
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Lead>, DomainError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

//! Lead repository port.
//!
//! Defines the contract for the durable lead table. Every write either
//! fully applies or fully fails; readers never observe a half-written
//! conversation.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::conversation::ConversationStep;
use crate::domain::foundation::{DomainError, LeadId, LeadStatus, Timestamp};
use crate::domain::lead::{Lead, Preferences, Registration, Transcript};

/// Row of the session picker: enough to choose a saved lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSummary {
    pub id: LeadId,
    pub timestamp: Timestamp,
    pub status: LeadStatus,
}

/// Repository port for lead persistence.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Insert a new lead with an empty transcript, unset preferences,
    /// status Pending and the current time. Returns the assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, registration: &Registration) -> Result<LeadId, DomainError>;

    /// Overwrite transcript, preferences and step in a single write.
    ///
    /// # Errors
    ///
    /// - `LeadNotFound` if the lead doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_conversation(
        &self,
        id: LeadId,
        transcript: &Transcript,
        preferences: &Preferences,
        step: ConversationStep,
    ) -> Result<(), DomainError>;

    /// Overwrite the operator status only.
    ///
    /// # Errors
    ///
    /// - `LeadNotFound` if the lead doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_status(&self, id: LeadId, status: LeadStatus) -> Result<(), DomainError>;

    /// Remove a lead. Deleting a missing id succeeds.
    async fn delete(&self, id: LeadId) -> Result<(), DomainError>;

    /// Find a lead by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError>;

    /// Saved leads for an email, newest (highest id) first.
    async fn list_by_email(&self, email: &str) -> Result<Vec<LeadSummary>, DomainError>;

    /// Every lead, oldest (lowest id) first.
    async fn list_all(&self) -> Result<Vec<Lead>, DomainError>;
}

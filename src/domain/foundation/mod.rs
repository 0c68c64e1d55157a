//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the concierge domain.

mod errors;
mod ids;
mod lead_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatSessionId, LeadId};
pub use lead_status::LeadStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

//! Lead module - the persisted record of one chat session.
//!
//! # Module Structure
//!
//! - `aggregate` - Lead aggregate
//! - `registration` - Visitor name, email and mobile
//! - `transcript` - Ordered user/assistant turns
//! - `preferences` - Unit, purpose, budget and area slots
//! - `description` - Export summary line
//! - `errors` - Lead-specific errors

mod aggregate;
mod description;
mod errors;
mod preferences;
mod registration;
mod transcript;

pub use aggregate::Lead;
pub use description::describe;
pub use errors::{lead_not_found, LeadError};
pub use preferences::{PreferenceField, Preferences, Purpose};
pub use registration::{Registration, MAX_EMAIL_LENGTH, MAX_MOBILE_LENGTH, MAX_NAME_LENGTH};
pub use transcript::{Role, Transcript, Turn};

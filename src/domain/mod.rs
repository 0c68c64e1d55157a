//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, errors, state machine)
//! - `lead` - Lead aggregate, registration, transcript and preferences
//! - `conversation` - Questionnaire steps, prompts and keyword extraction

pub mod conversation;
pub mod foundation;
pub mod lead;

//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Chat session handlers drive the questionnaire for one browser; lead
//! handlers serve the operator's review and export screens.

pub mod handlers;
mod preference_extractor;
mod session_registry;

pub use preference_extractor::PreferenceExtractor;
pub use session_registry::{SessionHandle, SessionRegistry};

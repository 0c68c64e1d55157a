//! Conversation domain module.
//!
//! Drives the fixed questionnaire: which step comes next, what the
//! assistant says at each step, and what the visitor's words reveal.

mod context;
mod engine;
mod extractor;
mod prompts;
mod step;

pub use context::SessionContext;
pub use engine::{is_exit_phrase, next_step, EXIT_PHRASES};
pub use extractor::{extract_keywords, should_resolve_area, BUDGET_KEYWORDS, UNIT_KEYWORDS};
pub use prompts::{PromptBook, DEFAULT_BRAND};
pub use step::ConversationStep;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LeadRepository` - Durable lead table
//! - `AreaResolver` - Free-text area normalization with raw-text fallback
//! - `AIProvider` - Single-shot LLM completions backing the area resolver
//! - `LeadReportWriter` - Spreadsheet serialization of exported leads

mod ai_provider;
mod area_resolver;
mod lead_report;
mod lead_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo,
};
pub use area_resolver::AreaResolver;
pub use lead_report::{ExportError, LeadReportRow, LeadReportWriter};
pub use lead_repository::{LeadRepository, LeadSummary};

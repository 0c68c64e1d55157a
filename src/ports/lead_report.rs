//! Lead Report Port - spreadsheet export interface.
//!
//! The export handler turns leads into flat rows; adapters serialize the
//! rows into a downloadable file format.

use thiserror::Error;

use crate::domain::lead::Lead;

/// One exported lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReportRow {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub description: String,
    pub status: String,
}

impl LeadReportRow {
    /// Flattens a lead into the operator-facing columns.
    pub fn from_lead(lead: &Lead) -> Self {
        let registration = lead.registration();
        Self {
            name: registration.name().to_string(),
            email: registration.email().to_string(),
            mobile: registration.mobile().to_string(),
            description: lead.description(),
            status: lead.status().label().to_string(),
        }
    }
}

/// Port for serializing lead rows into a file.
///
/// # Contract
///
/// Implementations must:
/// - Emit a header row, even when `rows` is empty
/// - Preserve row order
pub trait LeadReportWriter: Send + Sync {
    /// Serialize rows into file bytes.
    fn write(&self, rows: &[LeadReportRow]) -> Result<Vec<u8>, ExportError>;

    /// MIME type of the produced file.
    fn content_type(&self) -> &'static str;

    /// File extension without the dot.
    fn file_extension(&self) -> &'static str;
}

/// Errors from report serialization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to write report: {0}")]
    Write(String),
}

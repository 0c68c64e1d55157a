//! ExportLeadsHandler - Spreadsheet export of every lead.

use std::sync::Arc;

use tracing::info;

use crate::domain::lead::LeadError;
use crate::ports::{LeadReportRow, LeadReportWriter, LeadRepository};

/// A generated export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadExport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

/// Handler that serializes all leads, oldest first.
pub struct ExportLeadsHandler {
    repository: Arc<dyn LeadRepository>,
    writer: Arc<dyn LeadReportWriter>,
    brand: String,
}

impl ExportLeadsHandler {
    pub fn new(
        repository: Arc<dyn LeadRepository>,
        writer: Arc<dyn LeadReportWriter>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            writer,
            brand: brand.into(),
        }
    }

    pub async fn handle(&self) -> Result<LeadExport, LeadError> {
        let rows: Vec<LeadReportRow> = self
            .repository
            .list_all()
            .await?
            .iter()
            .map(LeadReportRow::from_lead)
            .collect();

        let bytes = self
            .writer
            .write(&rows)
            .map_err(|e| LeadError::internal(e.to_string()))?;

        info!(rows = rows.len(), "Leads exported");
        Ok(LeadExport {
            file_name: format!("{}_Leads.{}", self.brand, self.writer.file_extension()),
            content_type: self.writer.content_type(),
            bytes,
            row_count: rows.len(),
        })
    }
}

//! CSV implementation of LeadReportWriter.

use std::borrow::Cow;

use crate::ports::{ExportError, LeadReportRow, LeadReportWriter};

const HEADERS: [&str; 5] = ["Name", "Email", "Mobile", "Description", "Status"];

/// Writes lead rows as comma-separated values with a header row.
///
/// Every cell comes from visitor input, so cells a spreadsheet would read as
/// a formula are prefixed with `'` and open as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLeadReportWriter;

impl CsvLeadReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LeadReportWriter for CsvLeadReportWriter {
    fn write(&self, rows: &[LeadReportRow]) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(HEADERS)
            .map_err(|e| ExportError::Write(e.to_string()))?;
        for row in rows {
            let cells = [
                as_text(&row.name),
                as_text(&row.email),
                as_text(&row.mobile),
                as_text(&row.description),
                as_text(&row.status),
            ];
            writer
                .write_record(cells.iter().map(|cell| cell.as_bytes()))
                .map_err(|e| ExportError::Write(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Write(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

fn as_text(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(|c: char| matches!(c, '=' | '+' | '-' | '@' | '\t' | '\r')) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, description: &str) -> LeadReportRow {
        LeadReportRow {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "0500000000".to_string(),
            description: description.to_string(),
            status: "Pending".to_string(),
        }
    }

    fn write(rows: &[LeadReportRow]) -> String {
        String::from_utf8(CsvLeadReportWriter.write(rows).unwrap()).unwrap()
    }

    #[test]
    fn empty_export_has_header_only() {
        assert_eq!(write(&[]), "Name,Email,Mobile,Description,Status\n");
    }

    #[test]
    fn rows_follow_header_in_order() {
        let csv = write(&[row("Ali", "New Lead / Browsing"), row("Sara", "New Lead / Browsing")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Ali,ali@example.com,0500000000,New Lead / Browsing,Pending"
        );
        assert!(lines[2].starts_with("Sara,"));
    }

    #[test]
    fn descriptions_with_commas_are_quoted() {
        let csv = write(&[row(
            "Ali",
            "Looking for 2BR, sea view to Buy in Marina (Budget: 2M)",
        )]);
        assert!(csv.contains("\"Looking for 2BR, sea view to Buy in Marina (Budget: 2M)\""));
    }

    #[test]
    fn formula_cells_are_written_as_text() {
        let mut hostile = row("Ali", "New Lead / Browsing");
        hostile.name = "=HYPERLINK(\"http://evil\",\"x\")".to_string();
        hostile.mobile = "+971500000000".to_string();
        hostile.email = "@cmd".to_string();

        let csv = write(&[hostile]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "\"'=HYPERLINK(\"\"http://evil\"\",\"\"x\"\")\",'@cmd,'+971500000000,New Lead / Browsing,Pending"
        );
    }

    #[test]
    fn leading_dash_and_tab_are_neutralized() {
        assert_eq!(as_text("-2+3"), "'-2+3");
        assert_eq!(as_text("\tcmd"), "'\tcmd");
        assert_eq!(as_text("Ali-Khan"), "Ali-Khan");
        assert!(matches!(as_text("plain"), Cow::Borrowed(_)));
    }
}

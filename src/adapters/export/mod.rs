//! Lead export adapters.

mod csv_report;

pub use csv_report::CsvLeadReportWriter;

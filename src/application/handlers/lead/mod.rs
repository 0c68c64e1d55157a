//! Lead review and export handlers.

mod delete_lead;
mod export_leads;
mod get_lead;
mod update_lead_status;

pub use delete_lead::{DeleteLeadCommand, DeleteLeadHandler};
pub use export_leads::{ExportLeadsHandler, LeadExport};
pub use get_lead::{GetLeadHandler, GetLeadQuery};
pub use update_lead_status::{UpdateLeadStatusCommand, UpdateLeadStatusHandler};

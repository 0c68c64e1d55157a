//! HTTP adapter for the operator's lead review and export.

mod dto;
mod handlers;
mod routes;

pub use dto::{LeadResponse, UpdateStatusRequest};
pub use handlers::LeadHandlers;
pub use routes::lead_routes;

//! HTTP routes for operator lead endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{delete_lead, export_leads, get_lead, update_lead_status, LeadHandlers};

/// Creates the lead review router.
pub fn lead_routes(handlers: LeadHandlers) -> Router {
    Router::new()
        .route("/export", get(export_leads))
        .route("/:id", get(get_lead).delete(delete_lead))
        .route("/:id/status", patch(update_lead_status))
        .with_state(handlers)
}

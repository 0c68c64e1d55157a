//! HTTP handlers for operator lead endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_path, lead_error_response};
use crate::application::handlers::{
    DeleteLeadCommand, DeleteLeadHandler, ExportLeadsHandler, GetLeadHandler, GetLeadQuery,
    UpdateLeadStatusCommand, UpdateLeadStatusHandler,
};
use crate::domain::foundation::{LeadId, LeadStatus};
use crate::domain::lead::LeadError;

use super::dto::{LeadResponse, UpdateStatusRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LeadHandlers {
    get_handler: Arc<GetLeadHandler>,
    status_handler: Arc<UpdateLeadStatusHandler>,
    delete_handler: Arc<DeleteLeadHandler>,
    export_handler: Arc<ExportLeadsHandler>,
}

impl LeadHandlers {
    pub fn new(
        get_handler: Arc<GetLeadHandler>,
        status_handler: Arc<UpdateLeadStatusHandler>,
        delete_handler: Arc<DeleteLeadHandler>,
        export_handler: Arc<ExportLeadsHandler>,
    ) -> Self {
        Self {
            get_handler,
            status_handler,
            delete_handler,
            export_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/leads/:id - Lead details
pub async fn get_lead(State(handlers): State<LeadHandlers>, Path(id): Path<String>) -> Response {
    let lead_id = match id.parse::<LeadId>() {
        Ok(id) => id,
        Err(_) => return invalid_path("lead ID"),
    };

    match handlers.get_handler.handle(GetLeadQuery { lead_id }).await {
        Ok(lead) => (StatusCode::OK, Json(LeadResponse::from(lead))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// PATCH /api/leads/:id/status - Change follow-up status
pub async fn update_lead_status(
    State(handlers): State<LeadHandlers>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Response {
    let lead_id = match id.parse::<LeadId>() {
        Ok(id) => id,
        Err(_) => return invalid_path("lead ID"),
    };
    let status = match req.status.parse::<LeadStatus>() {
        Ok(status) => status,
        Err(e) => return lead_error_response(LeadError::from(e)),
    };

    match handlers
        .status_handler
        .handle(UpdateLeadStatusCommand { lead_id, status })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// DELETE /api/leads/:id - Delete a lead
pub async fn delete_lead(State(handlers): State<LeadHandlers>, Path(id): Path<String>) -> Response {
    let lead_id = match id.parse::<LeadId>() {
        Ok(id) => id,
        Err(_) => return invalid_path("lead ID"),
    };

    match handlers
        .delete_handler
        .handle(DeleteLeadCommand { lead_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// GET /api/leads/export - Download every lead as a spreadsheet
pub async fn export_leads(State(handlers): State<LeadHandlers>) -> Response {
    match handlers.export_handler.handle().await {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, export.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.file_name),
                ),
            ],
            export.bytes,
        )
            .into_response(),
        Err(e) => lead_error_response(e),
    }
}

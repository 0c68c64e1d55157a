//! Top-level router: wires handlers, nests the API and adds middleware.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::export::CsvLeadReportWriter;
use crate::application::handlers::{
    DeleteLeadHandler, ExportLeadsHandler, GetLeadHandler, GetSessionStateHandler,
    HandleTurnHandler, ListSessionsHandler, LoadSessionHandler, LogoutHandler, RegisterHandler,
    StartNewSessionHandler, UpdateLeadStatusHandler,
};
use crate::application::{PreferenceExtractor, SessionRegistry};
use crate::config::{AppConfig, ServerConfig};
use crate::ports::{AreaResolver, LeadRepository};

use super::leads::{lead_routes, LeadHandlers};
use super::sessions::{session_routes, SessionHandlers};

/// Builds the complete application router from its two collaborators.
///
/// Must be called inside a tokio runtime; it spawns the idle-session sweeper.
pub fn concierge_router(
    repository: Arc<dyn LeadRepository>,
    area_resolver: Arc<dyn AreaResolver>,
    config: &AppConfig,
) -> Router {
    let registry = Arc::new(SessionRegistry::new(config.concierge.session_idle_timeout()));
    registry.start_sweeper(config.concierge.session_sweep_interval());
    let prompts = config.concierge.prompt_book();

    let sessions = SessionHandlers::new(
        Arc::new(RegisterHandler::new(
            repository.clone(),
            registry.clone(),
            prompts.clone(),
        )),
        Arc::new(GetSessionStateHandler::new(registry.clone(), prompts.clone())),
        Arc::new(HandleTurnHandler::new(
            repository.clone(),
            registry.clone(),
            PreferenceExtractor::new(area_resolver),
            prompts.clone(),
        )),
        Arc::new(StartNewSessionHandler::new(
            repository.clone(),
            registry.clone(),
            prompts.clone(),
        )),
        Arc::new(ListSessionsHandler::new(repository.clone(), registry.clone())),
        Arc::new(LoadSessionHandler::new(
            repository.clone(),
            registry.clone(),
            prompts.clone(),
        )),
        Arc::new(LogoutHandler::new(registry)),
    );

    let leads = LeadHandlers::new(
        Arc::new(GetLeadHandler::new(repository.clone())),
        Arc::new(UpdateLeadStatusHandler::new(repository.clone())),
        Arc::new(DeleteLeadHandler::new(repository.clone())),
        Arc::new(ExportLeadsHandler::new(
            repository,
            Arc::new(CsvLeadReportWriter::new()),
            prompts.brand(),
        )),
    );

    build_router(sessions, leads, &config.server)
}

/// Nests the session and lead routers under `/api` with shared middleware.
pub fn build_router(sessions: SessionHandlers, leads: LeadHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/sessions", session_routes(sessions))
        .nest("/api/leads", lead_routes(leads))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(%origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            tracing::warn!("No CORS origins configured; cross-origin requests are refused");
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    tracing::info!(count = origins.len(), "CORS configured");
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

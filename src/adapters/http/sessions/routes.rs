//! HTTP routes for chat session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_session, list_saved_leads, load_saved_lead, logout, register, send_message,
    start_new_session, SessionHandlers,
};

/// Creates the chat session router.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(register))
        .route("/:token", get(get_session).delete(logout))
        .route("/:token/messages", post(send_message))
        .route("/:token/new", post(start_new_session))
        .route("/:token/leads", get(list_saved_leads))
        .route("/:token/leads/:id/load", post(load_saved_lead))
        .with_state(handlers)
}

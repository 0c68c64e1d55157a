//! HTTP handlers for chat session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_path, lead_error_response};
use crate::application::handlers::{
    GetSessionStateHandler, GetSessionStateQuery, HandleTurnCommand, HandleTurnHandler,
    ListSessionsHandler, ListSessionsQuery, LoadSessionCommand, LoadSessionHandler,
    LogoutCommand, LogoutHandler, RegisterCommand, RegisterHandler, StartNewSessionCommand,
    StartNewSessionHandler,
};
use crate::domain::foundation::{ChatSessionId, LeadId};

use super::dto::{
    RegisterRequest, SavedLeadListResponse, SavedLeadResponse, SendMessageRequest,
    SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    register_handler: Arc<RegisterHandler>,
    state_handler: Arc<GetSessionStateHandler>,
    turn_handler: Arc<HandleTurnHandler>,
    new_session_handler: Arc<StartNewSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    load_handler: Arc<LoadSessionHandler>,
    logout_handler: Arc<LogoutHandler>,
}

impl SessionHandlers {
    pub fn new(
        register_handler: Arc<RegisterHandler>,
        state_handler: Arc<GetSessionStateHandler>,
        turn_handler: Arc<HandleTurnHandler>,
        new_session_handler: Arc<StartNewSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
        load_handler: Arc<LoadSessionHandler>,
        logout_handler: Arc<LogoutHandler>,
    ) -> Self {
        Self {
            register_handler,
            state_handler,
            turn_handler,
            new_session_handler,
            list_handler,
            load_handler,
            logout_handler,
        }
    }
}

fn parse_token(token: &str) -> Result<ChatSessionId, Response> {
    token
        .parse::<ChatSessionId>()
        .map_err(|_| invalid_path("session token"))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Register a visitor
pub async fn register(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterCommand {
        name: req.name,
        email: req.email,
        mobile: req.mobile,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(SessionResponse::from(view))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// GET /api/sessions/:token - Current conversation state
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(token): Path<String>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .state_handler
        .handle(GetSessionStateQuery { session_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// POST /api/sessions/:token/messages - Handle one visitor turn
pub async fn send_message(
    State(handlers): State<SessionHandlers>,
    Path(token): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = HandleTurnCommand {
        session_id,
        utterance: req.message,
    };

    match handlers.turn_handler.handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// POST /api/sessions/:token/new - Start a new chat for the same visitor
pub async fn start_new_session(
    State(handlers): State<SessionHandlers>,
    Path(token): Path<String>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .new_session_handler
        .handle(StartNewSessionCommand { session_id })
        .await
    {
        Ok(view) => (StatusCode::CREATED, Json(SessionResponse::from(view))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// GET /api/sessions/:token/leads - Saved chats for the visitor
pub async fn list_saved_leads(
    State(handlers): State<SessionHandlers>,
    Path(token): Path<String>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .list_handler
        .handle(ListSessionsQuery { session_id })
        .await
    {
        Ok(leads) => {
            let response = SavedLeadListResponse {
                leads: leads.into_iter().map(SavedLeadResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => lead_error_response(e),
    }
}

/// POST /api/sessions/:token/leads/:id/load - Resume a saved chat
pub async fn load_saved_lead(
    State(handlers): State<SessionHandlers>,
    Path((token, lead_id)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let lead_id = match lead_id.parse::<LeadId>() {
        Ok(id) => id,
        Err(_) => return invalid_path("lead ID"),
    };

    match handlers
        .load_handler
        .handle(LoadSessionCommand {
            session_id,
            lead_id,
        })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => lead_error_response(e),
    }
}

/// DELETE /api/sessions/:token - Log out
pub async fn logout(
    State(handlers): State<SessionHandlers>,
    Path(token): Path<String>,
) -> Response {
    let session_id = match parse_token(&token) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .logout_handler
        .handle(LogoutCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => lead_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_token_is_bad_request() {
        let response = parse_token("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn uuid_token_parses() {
        let id = ChatSessionId::new();
        assert_eq!(parse_token(&id.to_string()).ok(), Some(id));
    }
}

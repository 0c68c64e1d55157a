//! HTTP adapter for the visitor chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    RegisterRequest, SavedLeadListResponse, SavedLeadResponse, SendMessageRequest,
    SessionResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;

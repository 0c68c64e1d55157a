//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat_session;
pub mod lead;

pub use chat_session::{
    GetSessionStateHandler, GetSessionStateQuery, HandleTurnCommand, HandleTurnHandler,
    ListSessionsHandler, ListSessionsQuery, LoadSessionCommand, LoadSessionHandler,
    LogoutCommand, LogoutHandler, RegisterCommand, RegisterHandler, SessionView,
    StartNewSessionCommand, StartNewSessionHandler,
};
pub use lead::{
    DeleteLeadCommand, DeleteLeadHandler, ExportLeadsHandler, GetLeadHandler, GetLeadQuery,
    LeadExport, UpdateLeadStatusCommand, UpdateLeadStatusHandler,
};

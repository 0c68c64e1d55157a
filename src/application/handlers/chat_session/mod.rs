//! Chat session command and query handlers.

mod get_session_state;
mod handle_turn;
mod list_sessions;
mod load_session;
mod logout;
mod register;
mod start_new_session;
mod view;

pub use get_session_state::{GetSessionStateHandler, GetSessionStateQuery};
pub use handle_turn::{HandleTurnCommand, HandleTurnHandler};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use load_session::{LoadSessionCommand, LoadSessionHandler};
pub use logout::{LogoutCommand, LogoutHandler};
pub use register::{RegisterCommand, RegisterHandler};
pub use start_new_session::{StartNewSessionCommand, StartNewSessionHandler};
pub use view::SessionView;

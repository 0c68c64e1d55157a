//! HTTP adapters - REST API implementations.
//!
//! - `sessions` - Visitor registration and the chat itself
//! - `leads` - Operator review, status changes and CSV export

pub mod error;
pub mod leads;
pub mod sessions;
mod router;

pub use error::ErrorResponse;
pub use router::{build_router, concierge_router};

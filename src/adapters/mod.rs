//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Durable lead table
//! - `memory` - In-process lead table for tests and demos
//! - `ai` - Area resolution through Ollama or an OpenAI-compatible API
//! - `export` - CSV lead reports
//! - `http` - axum routes for the chat and operator surfaces

pub mod ai;
pub mod export;
pub mod http;
pub mod memory;
pub mod sqlite;

//! In-memory adapters for tests and local development.

mod lead_repository;

pub use lead_repository::InMemoryLeadRepository;

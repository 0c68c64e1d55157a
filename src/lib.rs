//! KAYA Concierge - Real-estate lead capture chat
//!
//! Registers a visitor, walks them through a short questionnaire (unit,
//! purpose, budget, area), records the conversation as a lead and lets an
//! operator review, re-status and export leads.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

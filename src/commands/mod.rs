//! Command handlers
//!
//! Each handler resolves through the engine and renders either a text view
//! or one NDJSON `data` envelope.

pub mod check;
pub mod layout;
pub mod licenses;
pub mod list;
pub mod resolve;

//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolutionEngine` - Caller-facing resolution API over one catalog snapshot
//! - `CheckUseCase` - Resolves a whole catalog and collects every diagnostic

pub mod check;
mod engine;

pub use check::{CheckOptions, CheckResult, CheckUseCase};
pub use engine::ResolutionEngine;

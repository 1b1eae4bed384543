//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the engine with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Builds the engine from config (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ContextArgs};
pub use factory::{create_engine, create_reporter};

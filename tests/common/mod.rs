//! Common test utilities for Stencil contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Assertion macros: `assert_output_contains!`, `assert_diagnostics!`
//! - Fixtures: descriptor builders and catalog documents

#![allow(dead_code, unused_imports)]


pub use assertions::*;
pub use env::*;
pub use fixtures::*;

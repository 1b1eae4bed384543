//! Diagnostic reporters and sinks
//!
//! Reporters implement the strict/resilient policy; sinks decide where
//! recorded diagnostics go.

mod json;
mod reporters;
mod sinks;

pub use json::JsonDiagnosticSink;
pub use reporters::{reporter_for, ResilientReporter, StrictReporter};
pub use sinks::{BackgroundSink, MemorySink, TracingSink};

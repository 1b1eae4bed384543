//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - File-backed `CatalogSource` and metadata loading
//! - `diagnostics/` - Strict/resilient reporters and diagnostic sinks

pub mod catalog;
pub mod diagnostics;

pub use catalog::{FsCatalogSource, LoadedCatalog};
pub use diagnostics::{
    reporter_for, BackgroundSink, JsonDiagnosticSink, MemorySink, ResilientReporter,
    StrictReporter, TracingSink,
};

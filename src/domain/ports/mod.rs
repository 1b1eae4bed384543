//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;
pub mod diagnostic_reporter;
pub mod metadata_source;

pub use catalog_source::{matches_language, CatalogSource, InMemoryCatalog};
pub use diagnostic_reporter::{DiagnosticReporter, DiagnosticSink, NoopSink, ResolveError};
pub use metadata_source::{MetadataSource, NoMetadata, StaticMetadata, TemplateMetadata};

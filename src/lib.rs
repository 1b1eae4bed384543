//! Stencil - template relationship resolution and compatibility engine
//!
//! Stencil answers, for a generation context (platform, project type,
//! frameworks, platform options), which catalog templates are compatible,
//! what they transitively depend on, require and exclude, which licenses a
//! generated project inherits, and how project layouts are filled.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckOptions, CheckResult, CheckUseCase, ResolutionEngine};
pub use config::Config;
pub use domain::entities::{
    Catalog, CatalogError, LayoutEntry, LayoutSlot, License, ResolvedNode, TemplateDescriptor,
};
pub use domain::ports::{
    CatalogSource, DiagnosticReporter, DiagnosticSink, InMemoryCatalog, MetadataSource,
    ResolveError, StaticMetadata, TemplateMetadata,
};
pub use domain::value_objects::{
    Diagnostic, DiagnosticKind, DiagnosticMode, ResolutionContext, TemplateKind, ALL,
};
pub use error::{StencilError, StencilResult};
pub use infrastructure::{
    reporter_for, FsCatalogSource, MemorySink, ResilientReporter, StrictReporter,
};

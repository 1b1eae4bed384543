//! Domain Services
//!
//! Pure resolution logic over a catalog snapshot. No I/O; every data error
//! goes through the injected `DiagnosticReporter`.

mod layout_resolver;
mod license_aggregator;
mod relationship_resolver;
mod template_resolver;

#[cfg(test)]
mod test_support;

pub use layout_resolver::{LayoutIter, LayoutResolver};
pub use license_aggregator::LicenseAggregator;
pub use relationship_resolver::{DependencyClosure, RelationshipResolver};
pub use template_resolver::TemplateResolver;

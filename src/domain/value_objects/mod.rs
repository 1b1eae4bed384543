//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod diagnostic;
mod diagnostic_mode;
mod resolution_context;
mod template_kind;

pub use config_warning::ConfigWarning;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use diagnostic_mode::DiagnosticMode;
pub use resolution_context::{ResolutionContext, ALL};
pub use template_kind::TemplateKind;

//! Diagnostic Reporter Port
//!
//! The capability every resolver reports catalog data errors through.
//! The reporter decides whether an error aborts the call or is recorded
//! and skipped; resolvers only ever write `reporter.report(d)?` and move on.

use crate::domain::value_objects::Diagnostic;

/// Errors a resolution call can return
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Strict mode: the first catalog data error aborts the call
    #[error("catalog error [{code}]: {0}", code = .0.code())]
    Catalog(Diagnostic),

    /// The caller asked for an identity that is not in the snapshot
    #[error("unknown template '{identity}'")]
    UnknownTemplate { identity: String },
}

impl ResolveError {
    /// The diagnostic that aborted the call, if any
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ResolveError::Catalog(d) => Some(d),
            ResolveError::UnknownTemplate { .. } => None,
        }
    }
}

/// Policy for catalog data errors
///
/// Implementations:
/// - `StrictReporter`: returns `Err`, aborting the resolution
/// - `ResilientReporter`: forwards to a `DiagnosticSink` and returns `Ok`
pub trait DiagnosticReporter: Send + Sync {
    /// Report a data error. `Err` aborts the current resolution call;
    /// `Ok` means the offending relationship is dropped and resolution goes on.
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ResolveError>;
}

/// Destination for recorded diagnostics (telemetry, logs, NDJSON, memory)
///
/// `on_diagnostic` is called from resolution; implementations must not block
/// for long. Wrap slow sinks in `BackgroundSink`.
pub trait DiagnosticSink: Send + Sync {
    fn on_diagnostic(&self, diagnostic: &Diagnostic);
}

/// Sink that drops everything
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn on_diagnostic(&self, _diagnostic: &Diagnostic) {}
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        (**self).on_diagnostic(diagnostic)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        (**self).on_diagnostic(diagnostic)
    }
}

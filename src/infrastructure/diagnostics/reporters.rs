//! Diagnostic policies
//!
//! `StrictReporter` turns the first data error into an `Err`;
//! `ResilientReporter` records it and lets resolution continue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::ports::{DiagnosticReporter, DiagnosticSink, ResolveError};
use crate::domain::value_objects::{Diagnostic, DiagnosticMode};

/// Abort on the first catalog data error
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictReporter;

impl DiagnosticReporter for StrictReporter {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ResolveError> {
        tracing::debug!(code = diagnostic.code(), "aborting resolution");
        Err(ResolveError::Catalog(diagnostic))
    }
}

/// Record catalog data errors through a sink and keep going
pub struct ResilientReporter {
    sink: Box<dyn DiagnosticSink>,
    recorded: AtomicUsize,
}

impl ResilientReporter {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            recorded: AtomicUsize::new(0),
        }
    }

    /// Number of diagnostics recorded since construction
    pub fn recorded(&self) -> usize {
        self.recorded.load(Ordering::Relaxed)
    }
}

impl DiagnosticReporter for ResilientReporter {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ResolveError> {
        self.recorded.fetch_add(1, Ordering::Relaxed);
        self.sink.on_diagnostic(&diagnostic);
        Ok(())
    }
}

/// Reporter for `mode`. Strict mode never touches the sink.
pub fn reporter_for(
    mode: DiagnosticMode,
    sink: impl DiagnosticSink + 'static,
) -> Arc<dyn DiagnosticReporter> {
    match mode {
        DiagnosticMode::Strict => Arc::new(StrictReporter),
        DiagnosticMode::Resilient => Arc::new(ResilientReporter::new(sink)),
    }
}

//! Check Use Case
//!
//! Resolves every compatible template (and the layout) for a context with a
//! recording reporter and collects the diagnostics. Used by template
//! authors to find inconsistencies in a catalog in one pass.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::value_objects::{Diagnostic, ResolutionContext, TemplateKind};
use crate::infrastructure::diagnostics::{MemorySink, ResilientReporter};

use super::ResolutionEngine;

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Only check templates of this kind
    pub kind: Option<TemplateKind>,
    /// Skip the layout pass
    pub skip_layout: bool,
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub templates_checked: usize,
    pub layout_entries: usize,
    /// Distinct diagnostics, first-reported order
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct CheckUseCase<'e> {
    engine: &'e ResolutionEngine,
}

impl<'e> CheckUseCase<'e> {
    pub fn new(engine: &'e ResolutionEngine) -> Self {
        Self { engine }
    }

    /// Runs in resilient mode regardless of the engine's own policy, so every
    /// problem is reported rather than only the first.
    pub fn run(&self, ctx: &ResolutionContext, options: &CheckOptions) -> CheckResult {
        let sink = MemorySink::new();
        let engine = self
            .engine
            .with_reporter(Arc::new(ResilientReporter::new(sink.clone())));

        let mut result = CheckResult::default();
        for template in engine.compatible_templates(options.kind, ctx) {
            result.templates_checked += 1;
            if let Err(e) = engine.resolve(template, ctx) {
                tracing::error!(template = template.identity(), error = %e, "check aborted resolution");
            }
        }

        if !options.skip_layout {
            result.layout_entries = engine.resolve_layout(ctx).filter(Result::is_ok).count();
        }

        let mut seen = HashSet::new();
        result.diagnostics = sink
            .diagnostics()
            .into_iter()
            .filter(|d| seen.insert(d.clone()))
            .collect();

        tracing::debug!(
            templates = result.templates_checked,
            diagnostics = result.diagnostics.len(),
            "catalog check finished"
        );
        result
    }
}

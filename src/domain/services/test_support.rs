//! Shared fixtures for service tests

use std::sync::Mutex;

use crate::domain::entities::{Catalog, TemplateDescriptor};
use crate::domain::ports::{DiagnosticReporter, ResolveError};
use crate::domain::value_objects::{Diagnostic, DiagnosticKind, ResolutionContext, TemplateKind};

/// Records every diagnostic and lets resolution continue
#[derive(Default)]
pub struct Recorder {
    seen: Mutex<Vec<Diagnostic>>,
}

impl Recorder {
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.seen.lock().unwrap().iter().map(|d| d.kind).collect()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen.lock().unwrap().clone()
    }
}

impl DiagnosticReporter for Recorder {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ResolveError> {
        self.seen.lock().unwrap().push(diagnostic);
        Ok(())
    }
}

/// Aborts on the first diagnostic
pub struct Abort;

impl DiagnosticReporter for Abort {
    fn report(&self, diagnostic: Diagnostic) -> Result<(), ResolveError> {
        Err(ResolveError::Catalog(diagnostic))
    }
}

pub fn ctx() -> ResolutionContext {
    ResolutionContext::new("test", "pt1")
}

pub fn item(identity: &str) -> TemplateDescriptor {
    TemplateDescriptor::new(identity, TemplateKind::Page, "test").with_project_types(["all"])
}

pub fn project(identity: &str) -> TemplateDescriptor {
    TemplateDescriptor::new(identity, TemplateKind::Project, "test").with_project_types(["all"])
}

pub fn catalog(templates: Vec<TemplateDescriptor>) -> Catalog {
    Catalog::new(templates).unwrap()
}

pub fn identities(templates: &[&TemplateDescriptor]) -> Vec<String> {
    templates.iter().map(|t| t.identity().to_string()).collect()
}

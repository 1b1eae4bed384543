//! Resolution engine
//!
//! Caller-facing facade over the domain services. Holds one immutable
//! catalog snapshot plus the injected reporter and metadata source; every
//! call builds its traversal state locally, so one engine can serve
//! concurrent resolutions.

use std::sync::Arc;

use crate::domain::entities::{Catalog, License, ResolvedNode, TemplateDescriptor};
use crate::domain::policies::is_compatible;
use crate::domain::ports::{CatalogSource, DiagnosticReporter, MetadataSource, NoMetadata, ResolveError};
use crate::domain::services::{
    LayoutIter, LayoutResolver, LicenseAggregator, RelationshipResolver, TemplateResolver,
};
use crate::domain::value_objects::{ResolutionContext, TemplateKind};

#[derive(Clone)]
pub struct ResolutionEngine {
    catalog: Arc<Catalog>,
    reporter: Arc<dyn DiagnosticReporter>,
    metadata: Arc<dyn MetadataSource>,
}

impl std::fmt::Debug for ResolutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl ResolutionEngine {
    pub fn new(catalog: impl Into<Arc<Catalog>>, reporter: Arc<dyn DiagnosticReporter>) -> Self {
        Self {
            catalog: catalog.into(),
            reporter,
            metadata: Arc::new(NoMetadata),
        }
    }

    /// Build a snapshot from `source` (filtered by `language`).
    pub fn from_source(
        source: &dyn CatalogSource,
        language: Option<&str>,
        reporter: Arc<dyn DiagnosticReporter>,
    ) -> anyhow::Result<Self> {
        let templates = source.list_all(language)?;
        let catalog = Catalog::new(templates)?;
        tracing::debug!(templates = catalog.len(), ?language, "catalog snapshot built");
        Ok(Self::new(catalog, reporter))
    }

    pub fn with_metadata(mut self, metadata: Arc<dyn MetadataSource>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Same snapshot and metadata, different diagnostic policy
    pub fn with_reporter(&self, reporter: Arc<dyn DiagnosticReporter>) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            reporter,
            metadata: Arc::clone(&self.metadata),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn is_compatible(&self, template: &TemplateDescriptor, ctx: &ResolutionContext) -> bool {
        is_compatible(template, ctx)
    }

    /// Compatible templates of `kind` (every kind when `None`), catalog order
    pub fn compatible_templates(
        &self,
        kind: Option<TemplateKind>,
        ctx: &ResolutionContext,
    ) -> Vec<&TemplateDescriptor> {
        self.catalog
            .iter()
            .filter(|t| kind.map_or(true, |k| t.kind() == k))
            .filter(|t| is_compatible(t, ctx))
            .collect()
    }

    /// Look an identity up in the snapshot, ignoring compatibility
    pub fn template(&self, identity: &str) -> Result<&TemplateDescriptor, ResolveError> {
        self.catalog
            .get(identity)
            .ok_or_else(|| ResolveError::UnknownTemplate {
                identity: identity.to_string(),
            })
    }

    /// Metadata display name, else descriptor name, else identity
    pub fn display_name(&self, template: &TemplateDescriptor) -> String {
        self.templates().describe(template).display_name
    }

    pub fn dependencies(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&TemplateDescriptor>, ResolveError> {
        self.relationships().dependencies(template, ctx)
    }

    pub fn requirements(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&TemplateDescriptor>, ResolveError> {
        self.relationships().requirements(template, ctx)
    }

    pub fn exclusions(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&TemplateDescriptor>, ResolveError> {
        self.relationships().exclusions(template, ctx)
    }

    /// Fully resolve `template` under `ctx`
    pub fn resolve(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<ResolvedNode, ResolveError> {
        self.templates().resolve(template, ctx)
    }

    pub fn resolve_identity(
        &self,
        identity: &str,
        ctx: &ResolutionContext,
    ) -> Result<ResolvedNode, ResolveError> {
        let template = self.template(identity)?;
        self.resolve(template, ctx)
    }

    /// Lazy, restartable layout for `ctx`
    pub fn resolve_layout(&self, ctx: &ResolutionContext) -> LayoutIter<'_> {
        LayoutResolver::new(self.templates()).resolve_layout(ctx)
    }

    /// Licenses of `identity` and its dependency closure, first-seen order
    pub fn all_licenses(
        &self,
        identity: &str,
        ctx: &ResolutionContext,
    ) -> Result<Vec<License>, ResolveError> {
        let template = self.template(identity)?;
        LicenseAggregator::new(self.relationships()).all_licenses(template, ctx)
    }

    fn relationships(&self) -> RelationshipResolver<'_> {
        RelationshipResolver::new(&self.catalog, self.reporter.as_ref())
    }

    fn templates(&self) -> TemplateResolver<'_> {
        TemplateResolver::new(self.relationships(), self.metadata.as_ref())
    }
}

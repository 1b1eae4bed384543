//! Template resolver
//!
//! Builds the caller-facing `ResolvedNode` graph: descriptive fields plus
//! dependencies, requirements and exclusions, each child resolved the same
//! way. This recursion sits on top of the flat dependency closure, so a
//! dependency's own relationships are populated too.

use crate::domain::entities::{ResolvedNode, TemplateDescriptor};
use crate::domain::ports::{MetadataSource, ResolveError};
use crate::domain::value_objects::ResolutionContext;

use super::RelationshipResolver;

#[derive(Clone, Copy)]
pub struct TemplateResolver<'a> {
    relationships: RelationshipResolver<'a>,
    metadata: &'a dyn MetadataSource,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(relationships: RelationshipResolver<'a>, metadata: &'a dyn MetadataSource) -> Self {
        Self {
            relationships,
            metadata,
        }
    }

    pub fn relationships(&self) -> RelationshipResolver<'a> {
        self.relationships
    }

    /// Fully resolve `template` under `ctx`.
    ///
    /// Every closure member is resolved with its own closure, and nodes are
    /// not shared between branches. A straight chain of N dependencies
    /// therefore yields on the order of 2^N nodes, so deep chains get
    /// expensive quickly (and `check` resolves every compatible template).
    pub fn resolve(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<ResolvedNode, ResolveError> {
        let mut chain = Vec::new();
        self.resolve_in_chain(template, ctx, &mut chain)
    }

    /// Descriptive fields only, no relationships
    pub fn describe(&self, template: &TemplateDescriptor) -> ResolvedNode {
        let metadata = self.metadata.describe(template.name());
        let display_name = metadata
            .as_ref()
            .and_then(|m| m.display_name.clone())
            .unwrap_or_else(|| {
                if template.name().is_empty() {
                    template.identity().to_string()
                } else {
                    template.name().to_string()
                }
            });

        let mut node = ResolvedNode::leaf(template.clone(), display_name);
        if let Some(metadata) = metadata {
            node.description = metadata.description;
            node.icon = metadata.icon;
        }
        node
    }

    // `chain` holds the identities currently being resolved, outermost first.
    // A child already on the chain becomes a leaf so the graph stays finite
    // even when the catalog contains cycles.
    fn resolve_in_chain(
        &self,
        template: &TemplateDescriptor,
        ctx: &ResolutionContext,
        chain: &mut Vec<String>,
    ) -> Result<ResolvedNode, ResolveError> {
        let mut node = self.describe(template);

        let dependencies = self.relationships.dependencies(template, ctx)?;
        let requirements = self.relationships.requirements(template, ctx)?;
        let exclusions = self.relationships.exclusions(template, ctx)?;

        chain.push(template.identity().to_string());
        node.dependencies = self.resolve_each(&dependencies, ctx, chain)?;
        node.requirements = self.resolve_each(&requirements, ctx, chain)?;
        node.exclusions = self.resolve_each(&exclusions, ctx, chain)?;
        chain.pop();

        Ok(node)
    }

    fn resolve_each(
        &self,
        templates: &[&TemplateDescriptor],
        ctx: &ResolutionContext,
        chain: &mut Vec<String>,
    ) -> Result<Vec<ResolvedNode>, ResolveError> {
        templates
            .iter()
            .map(|t| {
                if chain.iter().any(|id| id == t.identity()) {
                    Ok(self.describe(t))
                } else {
                    self.resolve_in_chain(t, ctx, chain)
                }
            })
            .collect()
    }
}

//! Relationship resolver
//!
//! Resolves the templates a root template pulls in (dependencies, transitive),
//! asks for (requirements, one level) and rules out (exclusions, one level,
//! matched by group identity). Every lookup is restricted to templates
//! compatible with the resolution context.

use std::collections::HashSet;

use crate::domain::entities::{Catalog, TemplateDescriptor};
use crate::domain::policies::is_compatible;
use crate::domain::ports::{DiagnosticReporter, ResolveError};
use crate::domain::value_objects::{Diagnostic, DiagnosticKind, ResolutionContext};

/// Accumulator for one dependency closure.
///
/// Holds the discovered dependencies in discovery order plus the set of
/// identities already seen (the root included, so it never shows up in its
/// own closure). Local to one traversal; never shared between calls.
#[derive(Debug, Clone)]
pub struct DependencyClosure<'a> {
    visited: HashSet<String>,
    templates: Vec<&'a TemplateDescriptor>,
}

impl<'a> DependencyClosure<'a> {
    /// Empty closure for `root`
    pub fn new(root: &TemplateDescriptor) -> Self {
        let mut visited = HashSet::new();
        visited.insert(root.identity().to_string());
        Self {
            visited,
            templates: Vec::new(),
        }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.visited.contains(identity)
    }

    pub fn templates(&self) -> &[&'a TemplateDescriptor] {
        &self.templates
    }

    pub fn into_templates(self) -> Vec<&'a TemplateDescriptor> {
        self.templates
    }

    /// Returns false if the template was already seen
    fn insert(&mut self, template: &'a TemplateDescriptor) -> bool {
        if !self.visited.insert(template.identity().to_string()) {
            return false;
        }
        self.templates.push(template);
        true
    }
}

/// Resolves dependency, requirement and exclusion relationships
#[derive(Clone, Copy)]
pub struct RelationshipResolver<'a> {
    catalog: &'a Catalog,
    reporter: &'a dyn DiagnosticReporter,
}

impl<'a> RelationshipResolver<'a> {
    pub fn new(catalog: &'a Catalog, reporter: &'a dyn DiagnosticReporter) -> Self {
        Self { catalog, reporter }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn reporter(&self) -> &'a dyn DiagnosticReporter {
        self.reporter
    }

    /// Transitive dependencies of `root`, in discovery order, root excluded.
    pub fn dependencies(
        &self,
        root: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&'a TemplateDescriptor>, ResolveError> {
        let mut closure = DependencyClosure::new(root);
        self.collect_dependencies(root, ctx, &mut closure)?;
        Ok(closure.into_templates())
    }

    /// Walk the dependencies of `root` into an existing closure.
    ///
    /// Traversal is depth-first: each newly discovered dependency is expanded
    /// before its next sibling. A dependency already in the closure is not
    /// expanded again.
    pub fn collect_dependencies(
        &self,
        root: &TemplateDescriptor,
        ctx: &ResolutionContext,
        closure: &mut DependencyClosure<'a>,
    ) -> Result<(), ResolveError> {
        for identity in root.dependency_identities() {
            let Some(dependency) = self.find(ctx, |t| t.identity() == identity) else {
                self.report(DiagnosticKind::DependencyNotFound, root, identity)?;
                continue;
            };

            if !dependency.is_item() {
                self.report(DiagnosticKind::DependencyWrongKind, root, identity)?;
                continue;
            }

            if dependency.allows_multiple_instances() {
                self.report(DiagnosticKind::DependencyCannotBeMultiInstance, root, identity)?;
                continue;
            }

            // Direct back-edge only: the dependency was already reached and
            // lists the current root as one of its own dependencies.
            if closure.contains(dependency.identity()) && dependency.depends_on(root.identity()) {
                self.report(DiagnosticKind::CircularDependency, root, identity)?;
                continue;
            }

            if closure.insert(dependency) {
                tracing::debug!(
                    template = root.identity(),
                    dependency = dependency.identity(),
                    "dependency added to closure"
                );
                self.collect_dependencies(dependency, ctx, closure)?;
            }
        }

        Ok(())
    }

    /// Requirements of `root`. One level only: requirements may not require.
    pub fn requirements(
        &self,
        root: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&'a TemplateDescriptor>, ResolveError> {
        let mut resolved: Vec<&'a TemplateDescriptor> = Vec::new();

        for identity in root.requirement_identities() {
            if root.right_click_enabled() {
                self.report(DiagnosticKind::RequirementsNotAllowedOnRightClick, root, identity)?;
                continue;
            }

            let Some(requirement) = self.find(ctx, |t| t.identity() == identity) else {
                self.report(DiagnosticKind::RequirementNotFound, root, identity)?;
                continue;
            };

            if !requirement.is_item() {
                self.report(DiagnosticKind::RequirementWrongKind, root, identity)?;
                continue;
            }

            if !requirement.requirement_identities().is_empty() {
                self.report(DiagnosticKind::RecursiveRequirementNotAllowed, root, identity)?;
                continue;
            }

            if requirement.allows_multiple_instances() {
                self.report(DiagnosticKind::RequirementCannotBeMultiInstance, root, identity)?;
                continue;
            }

            push_unique(&mut resolved, requirement);
        }

        Ok(resolved)
    }

    /// Templates excluded by `root`, looked up by group identity. One level.
    pub fn exclusions(
        &self,
        root: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<&'a TemplateDescriptor>, ResolveError> {
        let mut resolved: Vec<&'a TemplateDescriptor> = Vec::new();

        for group in root.exclusion_identities() {
            if root.right_click_enabled() {
                self.report(DiagnosticKind::ExclusionsNotAllowedOnRightClick, root, group)?;
                continue;
            }

            if root.dependency_identities().contains(group) {
                self.report(DiagnosticKind::ExclusionConflictsWithDependency, root, group)?;
                continue;
            }

            if root.requirement_identities().contains(group) {
                self.report(DiagnosticKind::ExclusionConflictsWithRequirement, root, group)?;
                continue;
            }

            let Some(excluded) = self.find(ctx, |t| t.group_identity() == group) else {
                self.report(DiagnosticKind::ExclusionNotFound, root, group)?;
                continue;
            };

            if !excluded.is_item() {
                self.report(DiagnosticKind::ExclusionWrongKind, root, group)?;
                continue;
            }

            push_unique(&mut resolved, excluded);
        }

        Ok(resolved)
    }

    /// First compatible template matching `key`
    pub(crate) fn find<P>(&self, ctx: &ResolutionContext, key: P) -> Option<&'a TemplateDescriptor>
    where
        P: Fn(&TemplateDescriptor) -> bool,
    {
        self.catalog.find(|t| key(t) && is_compatible(t, ctx))
    }

    pub(crate) fn report(
        &self,
        kind: DiagnosticKind,
        template: &TemplateDescriptor,
        reference: &str,
    ) -> Result<(), ResolveError> {
        self.reporter
            .report(Diagnostic::new(kind, template.identity(), reference))
    }
}

fn push_unique<'a>(list: &mut Vec<&'a TemplateDescriptor>, template: &'a TemplateDescriptor) {
    if !list.iter().any(|t| t.identity() == template.identity()) {
        list.push(template);
    }
}

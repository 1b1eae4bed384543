//! License aggregator
//!
//! Collects the licenses a generated project inherits from a template and
//! its whole dependency closure.

use std::collections::HashSet;

use crate::domain::entities::{License, TemplateDescriptor};
use crate::domain::ports::ResolveError;
use crate::domain::value_objects::ResolutionContext;

use super::RelationshipResolver;

#[derive(Clone, Copy)]
pub struct LicenseAggregator<'a> {
    relationships: RelationshipResolver<'a>,
}

impl<'a> LicenseAggregator<'a> {
    pub fn new(relationships: RelationshipResolver<'a>) -> Self {
        Self { relationships }
    }

    /// Licenses of `root` and of every dependency in its closure.
    ///
    /// Duplicates (by `License::normalized`) are dropped; the first spelling
    /// seen wins and output follows first-seen order.
    pub fn all_licenses(
        &self,
        root: &TemplateDescriptor,
        ctx: &ResolutionContext,
    ) -> Result<Vec<License>, ResolveError> {
        let dependencies = self.relationships.dependencies(root, ctx)?;

        let mut seen = HashSet::new();
        let licenses = std::iter::once(root)
            .chain(dependencies)
            .flat_map(|t| t.licenses())
            .filter(|license| seen.insert(license.normalized()))
            .cloned()
            .collect();

        Ok(licenses)
    }
}

//! Catalog entity - an immutable snapshot of template descriptors
//!
//! Concurrent resolutions share one snapshot (usually behind an `Arc`).
//! Nothing in the engine mutates it after construction.

use std::collections::HashSet;

use super::TemplateDescriptor;

/// Errors raised while assembling a catalog snapshot
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate template identity '{identity}'")]
    DuplicateIdentity { identity: String },
}

/// Flat, ordered collection of template descriptors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<TemplateDescriptor>,
}

impl Catalog {
    /// Build a snapshot, rejecting duplicate identities.
    pub fn new(templates: Vec<TemplateDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.identity()) {
                return Err(CatalogError::DuplicateIdentity {
                    identity: template.identity().to_string(),
                });
            }
        }
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.iter()
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Look a template up by identity, ignoring compatibility
    pub fn get(&self, identity: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.identity() == identity)
    }

    /// First template (in catalog order) satisfying `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&TemplateDescriptor>
    where
        P: Fn(&TemplateDescriptor) -> bool,
    {
        self.templates.iter().find(|t| predicate(t))
    }
}

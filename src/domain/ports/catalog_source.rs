//! CatalogSource port - abstraction for listing template descriptors
//!
//! The engine only consumes the flat descriptor list; how descriptors are
//! stored, indexed or synchronized is the implementation's business.

use anyhow::Result;

use crate::domain::entities::TemplateDescriptor;

/// Abstract source of template descriptors
pub trait CatalogSource {
    /// List every template for `language`.
    ///
    /// `None` lists all templates. Templates without a language are
    /// language-agnostic and are returned for every filter.
    fn list_all(&self, language: Option<&str>) -> Result<Vec<TemplateDescriptor>>;
}

/// Language filter shared by catalog implementations
pub fn matches_language(template: &TemplateDescriptor, language: Option<&str>) -> bool {
    match (language, template.language()) {
        (None, _) | (_, None) => true,
        (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
    }
}

/// Catalog held in memory (embedding, tests)
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    templates: Vec<TemplateDescriptor>,
}

impl InMemoryCatalog {
    pub fn new(templates: Vec<TemplateDescriptor>) -> Self {
        Self { templates }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn list_all(&self, language: Option<&str>) -> Result<Vec<TemplateDescriptor>> {
        Ok(self
            .templates
            .iter()
            .filter(|t| matches_language(t, language))
            .cloned()
            .collect())
    }
}

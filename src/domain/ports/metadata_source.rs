//! MetadataSource port - descriptive fields for templates
//!
//! Display names, descriptions and icons are keyed by template name and
//! merged into resolved nodes. How they are loaded (localized files,
//! markdown, embedded defaults) is up to the implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Descriptive fields for one template name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

pub trait MetadataSource: Send + Sync {
    fn describe(&self, name: &str) -> Option<TemplateMetadata>;
}

/// No metadata: nodes fall back to the template name
pub struct NoMetadata;

impl MetadataSource for NoMetadata {
    fn describe(&self, _name: &str) -> Option<TemplateMetadata> {
        None
    }
}

/// Metadata table held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    entries: HashMap<String, TemplateMetadata>,
}

impl StaticMetadata {
    pub fn new(entries: impl IntoIterator<Item = TemplateMetadata>) -> Self {
        Self {
            entries: entries.into_iter().map(|m| (m.name.clone(), m)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataSource for StaticMetadata {
    fn describe(&self, name: &str) -> Option<TemplateMetadata> {
        self.entries.get(name).cloned()
    }
}

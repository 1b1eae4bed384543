//! On-disk catalog document format
//!
//! ```toml
//! [[templates]]
//! identity = "Grid.Rust"
//! group_identity = "Grid"
//! kind = "page"
//! platform = "web"
//! project_types = ["spa"]
//! dependencies = ["Auth.Rust"]
//!
//! [[metadata]]
//! name = "Grid"
//! display_name = "Data Grid"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{LayoutSlot, License, TemplateDescriptor};
use crate::domain::ports::TemplateMetadata;
use crate::domain::value_objects::TemplateKind;
use crate::error::{StencilError, StencilResult};

/// One catalog file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(default)]
    pub templates: Vec<DescriptorDoc>,
    #[serde(default)]
    pub metadata: Vec<TemplateMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DescriptorDoc {
    identity: String,
    #[serde(default)]
    group_identity: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    language: Option<String>,
    kind: String,
    platform: String,
    #[serde(default)]
    project_types: Vec<String>,
    #[serde(default)]
    front_end_frameworks: Vec<String>,
    #[serde(default)]
    back_end_frameworks: Vec<String>,
    #[serde(default)]
    platform_options: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
    #[serde(default)]
    exclusions: Vec<String>,
    #[serde(default)]
    multiple_instances: bool,
    #[serde(default)]
    right_click: bool,
    #[serde(default)]
    licenses: Vec<LicenseDoc>,
    #[serde(default)]
    layout: Vec<LayoutSlotDoc>,
}

#[derive(Debug, Deserialize)]
struct LicenseDoc {
    text: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct LayoutSlotDoc {
    target_group_identity: String,
    #[serde(default)]
    project_type_scope: Option<Vec<String>>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    read_only: bool,
}

impl DescriptorDoc {
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Convert into a domain descriptor. `file` is only used for errors.
    pub fn into_descriptor(self, file: &Path) -> StencilResult<TemplateDescriptor> {
        let kind: TemplateKind =
            self.kind
                .parse()
                .map_err(|message| StencilError::InvalidDescriptor {
                    identity: self.identity.clone(),
                    file: file.to_path_buf(),
                    message,
                })?;

        if self.identity.trim().is_empty() {
            return Err(StencilError::InvalidDescriptor {
                identity: self.identity,
                file: file.to_path_buf(),
                message: "identity must not be empty".to_string(),
            });
        }

        if !kind.is_project() && !self.layout.is_empty() {
            tracing::debug!(
                identity = %self.identity,
                "layout on a non-project template is ignored"
            );
        }

        let mut descriptor = TemplateDescriptor::new(self.identity, kind, self.platform)
            .with_project_types(self.project_types)
            .with_front_end_frameworks(self.front_end_frameworks)
            .with_back_end_frameworks(self.back_end_frameworks)
            .with_dependencies(self.dependencies)
            .with_requirements(self.requirements)
            .with_exclusions(self.exclusions)
            .with_multiple_instances(self.multiple_instances)
            .with_right_click(self.right_click)
            .with_licenses(
                self.licenses
                    .into_iter()
                    .map(|l| License::new(l.text, l.url))
                    .collect(),
            );

        if kind.is_project() {
            descriptor = descriptor.with_layout(
                self.layout
                    .into_iter()
                    .map(LayoutSlotDoc::into_slot)
                    .collect(),
            );
        }
        if let Some(group) = self.group_identity {
            descriptor = descriptor.with_group_identity(group);
        }
        if let Some(name) = self.name {
            descriptor = descriptor.with_name(name);
        }
        if let Some(language) = self.language {
            descriptor = descriptor.with_language(language);
        }
        for (key, values) in self.platform_options {
            descriptor = descriptor.with_platform_option(key, values);
        }

        Ok(descriptor)
    }
}

impl LayoutSlotDoc {
    fn into_slot(self) -> LayoutSlot {
        let mut slot = LayoutSlot::new(self.target_group_identity).with_read_only(self.read_only);
        if let Some(scope) = self.project_type_scope {
            slot = slot.with_project_type_scope(scope);
        }
        if let Some(name) = self.name {
            slot = slot.with_name(name);
        }
        slot
    }
}

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Toml,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(DocumentFormat::Toml),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Parse one document. Unknown fields are logged, not rejected.
pub(crate) fn parse_document(
    content: &str,
    format: DocumentFormat,
    file: &Path,
) -> StencilResult<CatalogDocument> {
    let mut unknown: Vec<String> = Vec::new();
    let invalid = |message: String| StencilError::InvalidDocument {
        file: file.to_path_buf(),
        message,
    };

    let document: CatalogDocument = match format {
        DocumentFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, |p| unknown.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
        DocumentFormat::Yaml => {
            let deserializer = serde_yaml_ng::Deserializer::from_str(content);
            serde_ignored::deserialize(deserializer, |p| unknown.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
    };

    for key in unknown {
        tracing::warn!(file = %file.display(), key = %key, "unknown catalog field");
    }

    Ok(document)
}

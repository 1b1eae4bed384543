//! File system catalog source
//!
//! Walks a catalog directory with the `ignore` walker (hidden files and
//! `.gitignore`/`.ignore` entries are skipped) and loads every TOML/YAML
//! catalog document in path order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

use crate::domain::entities::{CatalogError, TemplateDescriptor};
use crate::domain::ports::{matches_language, CatalogSource, StaticMetadata, TemplateMetadata};
use crate::error::{StencilError, StencilResult};

use super::document::{parse_document, DocumentFormat};

/// Everything a catalog directory contains
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub templates: Vec<TemplateDescriptor>,
    pub metadata: StaticMetadata,
}

/// Catalog stored as TOML/YAML files under one directory (or a single file)
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    root: PathBuf,
}

impl FsCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every descriptor and metadata entry.
    ///
    /// Identities must be unique across all files.
    pub fn load(&self) -> StencilResult<LoadedCatalog> {
        let files = self.catalog_files()?;

        let mut templates = Vec::new();
        let mut metadata: Vec<TemplateMetadata> = Vec::new();
        let mut seen = HashSet::new();

        for (file, format) in files {
            let content = fs::read_to_string(&file)?;
            let document = parse_document(&content, format, &file)?;
            tracing::debug!(
                file = %file.display(),
                templates = document.templates.len(),
                metadata = document.metadata.len(),
                "loaded catalog file"
            );

            for doc in document.templates {
                if !seen.insert(doc.identity().to_string()) {
                    return Err(CatalogError::DuplicateIdentity {
                        identity: doc.identity().to_string(),
                    }
                    .into());
                }
                templates.push(doc.into_descriptor(&file)?);
            }
            metadata.extend(document.metadata);
        }

        Ok(LoadedCatalog {
            templates,
            metadata: StaticMetadata::new(metadata),
        })
    }

    /// Catalog documents under the root, sorted by path
    fn catalog_files(&self) -> StencilResult<Vec<(PathBuf, DocumentFormat)>> {
        if !self.root.exists() {
            return Err(StencilError::CatalogNotFound {
                path: self.root.clone(),
            });
        }

        if self.root.is_file() {
            let format =
                DocumentFormat::from_path(&self.root).ok_or_else(|| StencilError::InvalidDocument {
                    file: self.root.clone(),
                    message: "expected a .toml, .yaml or .yml file".to_string(),
                })?;
            return Ok(vec![(self.root.clone(), format)]);
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| StencilError::InvalidDocument {
                file: self.root.clone(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if let Some(format) = DocumentFormat::from_path(entry.path()) {
                files.push((entry.into_path(), format));
            }
        }

        Ok(files)
    }
}

impl CatalogSource for FsCatalogSource {
    fn list_all(&self, language: Option<&str>) -> Result<Vec<TemplateDescriptor>> {
        self.load()?.list_all(language)
    }
}

/// A loaded directory answers `list_all` without touching the disk again.
impl CatalogSource for LoadedCatalog {
    fn list_all(&self, language: Option<&str>) -> Result<Vec<TemplateDescriptor>> {
        Ok(self
            .templates
            .iter()
            .filter(|t| matches_language(t, language))
            .cloned()
            .collect())
    }
}

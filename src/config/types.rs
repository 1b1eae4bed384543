//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, DiagnosticMode};
use crate::error::StencilResult;

use super::loader;

/// Where resilient-mode diagnostics are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// `tracing` warnings on stderr
    #[default]
    Tracing,
    /// NDJSON records on stderr
    Json,
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" | "log" => Ok(SinkKind::Tracing),
            "json" | "ndjson" => Ok(SinkKind::Json),
            other => Err(format!("unknown diagnostic sink '{}' (expected tracing or json)", other)),
        }
    }
}

/// `[diagnostics]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub mode: DiagnosticMode,

    #[serde(default)]
    pub sink: SinkKind,
}

/// `[catalog]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog directory or file. Relative paths are resolved against the
    /// directory of the config file that set them.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Only load templates for this language (plus language-agnostic ones)
    #[serde(default)]
    pub language: Option<String>,
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StencilResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StencilResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `STENCIL_*` environment overrides.
    pub fn load_or_default(project_root: Option<&Path>) -> StencilResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STENCIL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

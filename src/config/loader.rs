//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, DiagnosticMode};
use crate::error::{StencilError, StencilResult};

use super::types::{Config, SinkKind};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "stencil.toml";

pub const ENV_DIAGNOSTICS_MODE: &str = "STENCIL_DIAGNOSTICS_MODE";
pub const ENV_DIAGNOSTICS_SINK: &str = "STENCIL_DIAGNOSTICS_SINK";
pub const ENV_CATALOG: &str = "STENCIL_CATALOG";
pub const ENV_LANGUAGE: &str = "STENCIL_LANGUAGE";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StencilResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StencilError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(catalog), Some(base)) = (config.catalog.path.as_ref(), path.parent()) {
        if catalog.is_relative() && !base.as_os_str().is_empty() {
            config.catalog.path = Some(base.join(catalog));
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                file: path.to_path_buf(),
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file found wins; files are not merged. A file that
/// exists but does not parse is an error.
pub fn load_or_default(project_root: Option<&Path>) -> StencilResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config_dir>/stencil/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stencil").join("config.toml"))
}

/// Apply environment variable overrides (STENCIL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Override logic, with the variable lookup injected for tests
pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(mode) = var(ENV_DIAGNOSTICS_MODE) {
        match mode.parse::<DiagnosticMode>() {
            Ok(mode) => config.diagnostics.mode = mode,
            Err(message) => tracing::warn!(var = ENV_DIAGNOSTICS_MODE, "{}", message),
        }
    }

    if let Some(sink) = var(ENV_DIAGNOSTICS_SINK) {
        match sink.parse::<SinkKind>() {
            Ok(sink) => config.diagnostics.sink = sink,
            Err(message) => tracing::warn!(var = ENV_DIAGNOSTICS_SINK, "{}", message),
        }
    }

    if let Some(path) = var(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
        config.catalog.path = Some(PathBuf::from(path));
    }

    if let Some(language) = var(ENV_LANGUAGE) {
        let language = language.trim();
        config.catalog.language = (!language.is_empty()).then(|| language.to_string());
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["diagnostics", "mode", "sink", "catalog", "path", "language"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}

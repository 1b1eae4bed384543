//! Engine Factory
//!
//! Creates the resolution engine with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ResolutionEngine;
use crate::config::{Config, SinkKind};
use crate::domain::ports::DiagnosticReporter;
use crate::domain::value_objects::DiagnosticMode;
use crate::infrastructure::{
    reporter_for, BackgroundSink, FsCatalogSource, JsonDiagnosticSink, StrictReporter,
    TracingSink,
};

/// Catalog location used when neither config nor CLI name one
pub const DEFAULT_CATALOG_DIR: &str = "templates";

/// Catalog directory from config, relative to `project_root` when unset
pub fn catalog_path(config: &Config, project_root: &Path) -> PathBuf {
    config
        .catalog
        .path
        .clone()
        .unwrap_or_else(|| project_root.join(DEFAULT_CATALOG_DIR))
}

/// Reporter for the configured mode and sink.
///
/// In resilient mode every sink runs behind a `BackgroundSink`, so
/// `report` only enqueues. Dropping the engine (and with it the reporter)
/// flushes the queue.
pub fn create_reporter(config: &Config) -> Result<Arc<dyn DiagnosticReporter>> {
    if config.diagnostics.mode.is_strict() {
        return Ok(Arc::new(StrictReporter));
    }
    let sink = match config.diagnostics.sink {
        SinkKind::Tracing => BackgroundSink::spawn(TracingSink),
        SinkKind::Json => BackgroundSink::spawn(JsonDiagnosticSink::stderr()),
    }
    .context("failed to start diagnostic writer")?;
    Ok(reporter_for(config.diagnostics.mode, sink))
}

/// Load the catalog named by `config` and build an engine over it.
pub fn create_engine(config: &Config, project_root: &Path) -> Result<ResolutionEngine> {
    let root = catalog_path(config, project_root);
    let loaded = FsCatalogSource::new(&root)
        .load()
        .with_context(|| format!("failed to load catalog from {}", root.display()))?;

    let engine = ResolutionEngine::from_source(
        &loaded,
        config.catalog.language.as_deref(),
        create_reporter(config)?,
    )?;

    tracing::info!(
        catalog = %root.display(),
        templates = engine.catalog().len(),
        mode = %config.diagnostics.mode,
        "engine ready"
    );

    Ok(engine.with_metadata(Arc::new(loaded.metadata)))
}

/// `config` with the diagnostic mode forced to strict when requested
pub fn with_strict(mut config: Config, strict: bool) -> Config {
    if strict {
        config.diagnostics.mode = DiagnosticMode::Strict;
    }
    config
}

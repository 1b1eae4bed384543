//! Configuration module for Stencil
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (STENCIL_*)
//! 3. Project config (./stencil.toml)
//! 4. User config (<config_dir>/stencil/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    user_config_path, ENV_CATALOG, ENV_DIAGNOSTICS_MODE, ENV_DIAGNOSTICS_SINK, ENV_LANGUAGE,
    PROJECT_CONFIG_FILE,
};
pub use types::{CatalogConfig, Config, DiagnosticsConfig, SinkKind};

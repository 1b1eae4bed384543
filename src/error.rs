//! Error types for Stencil
//!
//! Uses `thiserror` for library errors. Resolution itself reports through
//! `ResolveError`; this type covers loading catalogs and configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::CatalogError;

/// Result type alias for Stencil operations
pub type StencilResult<T> = Result<T, StencilError>;

/// Main error type for catalog and config loading
#[derive(Error, Debug)]
pub enum StencilError {
    /// Catalog directory or file does not exist
    #[error("catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// A catalog document could not be parsed
    #[error("invalid catalog file {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// A descriptor parsed but carries a value the engine cannot use
    #[error("invalid descriptor '{identity}' in {file}: {message}")]
    InvalidDescriptor {
        identity: String,
        file: PathBuf,
        message: String,
    },

    /// Snapshot construction failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

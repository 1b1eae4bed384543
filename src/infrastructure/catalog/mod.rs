//! File-backed catalog adapter

mod document;
mod fs_source;

pub use fs_source::{FsCatalogSource, LoadedCatalog};

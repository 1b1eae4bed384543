//! Domain Entities
//!
//! - `TemplateDescriptor` - one template variant from the catalog
//! - `Catalog` - immutable snapshot of descriptors
//! - `ResolvedNode` / `LayoutEntry` - resolved views returned to callers

mod catalog;
mod descriptor;
mod resolved;

pub use catalog::{Catalog, CatalogError};
pub use descriptor::{LayoutSlot, License, TemplateDescriptor};
pub use resolved::{LayoutEntry, ResolvedNode};

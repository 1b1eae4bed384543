//! Domain Layer
//!
//! The resolution engine itself: pure logic over an immutable catalog
//! snapshot, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Descriptors, catalog snapshot, resolved views
//! - `value_objects/` - Kind, resolution context, diagnostics, mode
//! - `policies/` - Compatibility predicate
//! - `services/` - Relationship, template, layout and license resolvers
//! - `ports/` - Catalog, metadata and diagnostic interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Stateless** - Traversal state lives in the call, never in the services
//! 3. **Ports & Adapters** - Catalog loading and diagnostic reporting go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

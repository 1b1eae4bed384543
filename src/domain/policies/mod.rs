//! Domain Policies
//!
//! Business rules that govern which templates apply to a session.
//! These are pure functions that operate on domain entities.

mod compatibility;

pub use compatibility::is_compatible;

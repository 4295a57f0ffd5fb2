//! Domain Layer
//!
//! The innermost layer: record types, merge rules and the repository port.
//! Nothing here knows about HTTP or a concrete store.
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: vendors, categories and partial-update semantics

pub mod catalog;
pub mod shared;

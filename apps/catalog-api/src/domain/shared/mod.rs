//! Shared Domain Types
//!
//! Value objects shared by every record collection.

pub mod identifiers;

pub use identifiers::RecordId;

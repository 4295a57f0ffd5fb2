//! Strongly-typed record identifiers.
//!
//! Identifiers are opaque to clients. The store assigns them on first save
//! and they never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from an existing string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh identifier (UUID v4, hyphen-less).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_new_and_display() {
        let id = RecordId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(format!("{id}"), "abc123");
    }

    #[test]
    fn record_id_generate_is_unique() {
        let id1 = RecordId::generate();
        let id2 = RecordId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_id_has_no_hyphens() {
        let id = RecordId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(!id.as_str().contains('-'));
    }

    #[test]
    fn record_id_from_str_and_string() {
        let id: RecordId = "v-1".into();
        assert_eq!(id.as_str(), "v-1");

        let id: RecordId = String::from("v-2").into();
        assert_eq!(id.into_inner(), "v-2");
    }

    #[test]
    fn record_id_serializes_transparently() {
        let id = RecordId::new("xyz");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""xyz""#);

        let parsed: RecordId = serde_json::from_str(r#""xyz""#).unwrap();
        assert_eq!(parsed, id);
    }
}

//! HTTP request bodies.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A POST body holding either a single record or an array of records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A JSON array.
    Many(Vec<T>),
    /// A single JSON object.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Flatten into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Parse a JSON body that may legitimately be missing.
///
/// An empty (or whitespace-only) body and a literal `null` both yield `None`.
pub fn parse_optional_body<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
}

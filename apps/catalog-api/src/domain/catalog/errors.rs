//! Catalog errors.

use thiserror::Error;

use crate::domain::shared::RecordId;

/// Failures reported by a store adapter.
///
/// Propagated to callers unmodified; nothing in the service retries them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be opened or reached.
    #[error("store connection error: {0}")]
    Connection(String),

    /// A read or write statement failed.
    #[error("store query error: {0}")]
    Query(String),

    /// A document could not be encoded or decoded.
    #[error("document serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors surfaced by record use cases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// No record exists for the requested id.
    #[error("{kind} with ID = {id} not found")]
    NotFound {
        /// Record kind (e.g. "Vendor").
        kind: &'static str,
        /// Requested identifier.
        id: RecordId,
    },

    /// The request was missing a required payload.
    #[error("{0}")]
    InvalidArgument(String),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecordError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

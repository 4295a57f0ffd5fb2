//! Catalog Bounded Context
//!
//! Vendor and category records, the partial-update merge rules, and the
//! repository port through which the records are stored.
//!
//! # Key Concepts
//!
//! - **Record**: a stored document addressed by an opaque [`RecordId`]
//! - **Patch**: a record of the same shape with any subset of fields present
//! - **Merge**: computing the persisted state from a stored record and a patch

pub mod category;
pub mod errors;
pub mod patch;
pub mod repository;
pub mod vendor;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::shared::RecordId;

pub use category::Category;
pub use errors::{RecordError, StoreError};
pub use patch::{Mergeable, PatchOutcome, merge, merge_field};
pub use repository::RecordRepository;
pub use vendor::Vendor;

/// A document kind held in its own store collection.
pub trait Record:
    Mergeable + Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    /// Collection (table) name in the store.
    const COLLECTION: &'static str;

    /// The identifier, if the record has been stored.
    fn id(&self) -> Option<&RecordId>;

    /// Replace the identifier.
    fn set_id(&mut self, id: Option<RecordId>);

    /// Builder-style variant of [`Record::set_id`].
    #[must_use]
    fn with_id(mut self, id: RecordId) -> Self {
        self.set_id(Some(id));
        self
    }
}

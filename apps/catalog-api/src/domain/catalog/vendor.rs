//! Vendor record.

use serde::{Deserialize, Serialize};

use super::Record;
use super::patch::{Mergeable, PatchOutcome, merge_field};
use crate::domain::shared::RecordId;

/// A vendor in the catalog.
///
/// The same shape doubles as the PATCH payload: any subset of the name
/// fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Vendor {
    /// Create an unsaved vendor with both names set.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Set the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

impl Mergeable for Vendor {
    fn merge(mut self, patch: Self) -> PatchOutcome<Self> {
        let first_changed = merge_field(&mut self.first_name, patch.first_name);
        let last_changed = merge_field(&mut self.last_name, patch.last_name);

        PatchOutcome::new(self, first_changed || last_changed)
    }
}

impl Record for Vendor {
    const KIND: &'static str = "Vendor";
    const COLLECTION: &'static str = "vendors";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }
}

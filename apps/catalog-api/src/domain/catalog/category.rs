//! Category record.

use serde::{Deserialize, Serialize};

use super::Record;
use super::patch::{Mergeable, PatchOutcome, merge_field};
use crate::domain::shared::RecordId;

/// A product category in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// Create an unsaved category with a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: Some(description.into()),
        }
    }
}

impl Mergeable for Category {
    fn merge(mut self, patch: Self) -> PatchOutcome<Self> {
        let changed = merge_field(&mut self.description, patch.description);
        PatchOutcome::new(self, changed)
    }
}

impl Record for Category {
    const KIND: &'static str = "Category";
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }
}

//! Patch Merge Engine
//!
//! Computes the state a record should be persisted in after a partial
//! update, and whether a write is needed at all.
//!
//! The rules are the same for every text field:
//!
//! - an absent field on the stored record is normalized to empty text first;
//! - an absent field on the patch leaves the stored value untouched;
//! - a present field that differs from the stored value overwrites it and
//!   marks the record as changed.
//!
//! Merging never touches the store. Callers look the record up, merge, and
//! persist only when [`PatchOutcome::changed`] is set.

/// Result of merging a patch into a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome<T> {
    /// The merged record.
    pub record: T,
    /// Whether any field was overwritten.
    pub changed: bool,
}

impl<T> PatchOutcome<T> {
    /// Create a new outcome.
    #[must_use]
    pub const fn new(record: T, changed: bool) -> Self {
        Self { record, changed }
    }

    /// Split into the merged record and the changed flag.
    #[must_use]
    pub fn into_parts(self) -> (T, bool) {
        (self.record, self.changed)
    }
}

/// A record shape that accepts partial updates of its own shape.
pub trait Mergeable: Sized {
    /// Merge `patch` into `self` (the stored state).
    ///
    /// The identifier is never modified.
    #[must_use]
    fn merge(self, patch: Self) -> PatchOutcome<Self>;
}

/// Merge `patch` into `existing`.
#[must_use]
pub fn merge<T: Mergeable>(existing: T, patch: T) -> PatchOutcome<T> {
    existing.merge(patch)
}

/// Apply one optional text field of a patch onto the stored field.
///
/// Returns `true` when the stored value was overwritten.
pub fn merge_field(existing: &mut Option<String>, incoming: Option<String>) -> bool {
    let current = existing.get_or_insert_with(String::new);

    match incoming {
        Some(value) if *current != value => {
            *current = value;
            true
        }
        _ => false,
    }
}

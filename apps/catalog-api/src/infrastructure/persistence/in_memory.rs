//! In-memory record repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::catalog::{Record, RecordRepository, StoreError};
use crate::domain::shared::RecordId;

/// Process-local implementation of `RecordRepository`.
///
/// Used for development and tests. Records are listed in id order.
#[derive(Debug)]
pub struct InMemoryRecordRepository<T> {
    records: RwLock<BTreeMap<RecordId, T>>,
}

impl<T> Default for InMemoryRecordRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRecordRepository<T> {
    /// Create a new empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Record> InMemoryRecordRepository<T> {
    /// Store a record under a known id (for test setup).
    pub fn insert(&self, id: RecordId, record: T) {
        self.records.write().insert(id.clone(), record.with_id(id));
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for InMemoryRecordRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<T>, StoreError> {
        Ok(self.records.read().get(id).cloned())
    }

    async fn save(&self, mut record: T) -> Result<T, StoreError> {
        let id = record.id().cloned().unwrap_or_else(RecordId::generate);
        record.set_id(Some(id.clone()));
        self.records.write().insert(id, record.clone());
        Ok(record)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.records.write().clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.read().len() as u64)
    }
}

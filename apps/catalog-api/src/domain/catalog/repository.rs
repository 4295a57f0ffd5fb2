//! Record Repository Trait
//!
//! Defines the persistence abstraction for catalog records.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::Record;
use super::errors::StoreError;
use crate::domain::shared::RecordId;

/// Repository port for one record collection.
///
/// `save` is an upsert: a record without an id is assigned a fresh one by
/// the store, a record with an id replaces whatever is stored under it.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// All records, in store-defined order.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// The record stored under `id`, if any.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<T>, StoreError>;

    /// Insert or replace a record, returning it as stored.
    async fn save(&self, record: T) -> Result<T, StoreError>;

    /// Save each record in turn.
    async fn save_all(&self, records: Vec<T>) -> Result<Vec<T>, StoreError> {
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            saved.push(self.save(record).await?);
        }
        Ok(saved)
    }

    /// Remove every record in the collection.
    async fn delete_all(&self) -> Result<(), StoreError>;

    /// Number of records in the collection.
    async fn count(&self) -> Result<u64, StoreError>;
}

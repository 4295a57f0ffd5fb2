//! Manage Records Use Case
//!
//! List, get, create, replace and patch for one record collection.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::catalog::{Record, RecordError, RecordRepository, merge};
use crate::domain::shared::RecordId;

/// Use case for the CRUD operations of one collection.
pub struct ManageRecordsUseCase<T, R>
where
    T: Record,
    R: RecordRepository<T>,
{
    repository: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> ManageRecordsUseCase<T, R>
where
    T: Record,
    R: RecordRepository<T>,
{
    /// Create a new `ManageRecordsUseCase`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }

    /// All records in the collection. Empty is not an error.
    pub async fn list(&self) -> Result<Vec<T>, RecordError> {
        Ok(self.repository.find_all().await?)
    }

    /// The record for `id`, or `None`.
    pub async fn get(&self, id: &RecordId) -> Result<Option<T>, RecordError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Persist every candidate under a fresh store-assigned id.
    ///
    /// Returns how many records were created.
    pub async fn create(&self, candidates: Vec<T>) -> Result<usize, RecordError> {
        let candidates: Vec<T> = candidates
            .into_iter()
            .map(|mut candidate| {
                candidate.set_id(None);
                candidate
            })
            .collect();

        let saved = self.repository.save_all(candidates).await?;
        tracing::debug!(kind = T::KIND, count = saved.len(), "Records created");
        Ok(saved.len())
    }

    /// Store `record` under `id`, replacing whatever was there.
    ///
    /// Any id in the body is overridden by `id`. Always writes.
    pub async fn replace(&self, id: RecordId, record: T) -> Result<T, RecordError> {
        let saved = self.repository.save(record.with_id(id)).await?;
        tracing::debug!(kind = T::KIND, id = ?saved.id(), "Record replaced");
        Ok(saved)
    }

    /// Apply a partial update to the record stored under `id`.
    ///
    /// Writes only when the merge changed something; otherwise the merged
    /// record is returned as-is. The read and the write are not atomic, so
    /// concurrent patches of the same id may lose updates.
    pub async fn patch(&self, id: &RecordId, patch: Option<T>) -> Result<T, RecordError> {
        // 1. Load the stored record
        let existing =
            self.repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| RecordError::NotFound {
                    kind: T::KIND,
                    id: id.clone(),
                })?;

        // 2. Reject a missing payload
        let patch = patch.ok_or_else(|| {
            RecordError::InvalidArgument(format!("Request {} is null", T::KIND.to_lowercase()))
        })?;

        // 3. Merge, then write only if something changed
        let (merged, changed) = merge(existing, patch).into_parts();
        if !changed {
            tracing::debug!(kind = T::KIND, %id, "Patch left record unchanged");
            return Ok(merged);
        }

        let saved = self.repository.save(merged).await?;
        tracing::debug!(kind = T::KIND, %id, "Record patched");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Category, StoreError, Vendor};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        VendorRepo {}

        #[async_trait]
        impl RecordRepository<Vendor> for VendorRepo {
            async fn find_all(&self) -> Result<Vec<Vendor>, StoreError>;
            async fn find_by_id(&self, id: &RecordId) -> Result<Option<Vendor>, StoreError>;
            async fn save(&self, record: Vendor) -> Result<Vendor, StoreError>;
            async fn save_all(&self, records: Vec<Vendor>) -> Result<Vec<Vendor>, StoreError>;
            async fn delete_all(&self) -> Result<(), StoreError>;
            async fn count(&self) -> Result<u64, StoreError>;
        }
    }

    mock! {
        CategoryRepo {}

        #[async_trait]
        impl RecordRepository<Category> for CategoryRepo {
            async fn find_all(&self) -> Result<Vec<Category>, StoreError>;
            async fn find_by_id(&self, id: &RecordId) -> Result<Option<Category>, StoreError>;
            async fn save(&self, record: Category) -> Result<Category, StoreError>;
            async fn save_all(&self, records: Vec<Category>) -> Result<Vec<Category>, StoreError>;
            async fn delete_all(&self) -> Result<(), StoreError>;
            async fn count(&self) -> Result<u64, StoreError>;
        }
    }

    fn stored_vendor() -> Vendor {
        Vendor::new("fname", "lname").with_id(RecordId::new("1"))
    }

    fn repo_with_stored(stored: Option<Vendor>) -> MockVendorRepo {
        let mut repo = MockVendorRepo::new();
        repo.expect_find_by_id()
            .with(eq(RecordId::new("1")))
            .returning(move |_| Ok(stored.clone()));
        repo
    }

    fn use_case(repo: MockVendorRepo) -> ManageRecordsUseCase<Vendor, MockVendorRepo> {
        ManageRecordsUseCase::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn patch_with_new_first_name_saves_once() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save()
            .withf(|v| {
                v.first_name.as_deref() == Some("new fname")
                    && v.last_name.as_deref() == Some("lname")
            })
            .times(1)
            .returning(Ok);

        let result = use_case(repo)
            .patch(
                &RecordId::new("1"),
                Some(Vendor::default().with_first_name("new fname")),
            )
            .await
            .unwrap();

        assert_eq!(result.first_name.as_deref(), Some("new fname"));
        assert_eq!(result.last_name.as_deref(), Some("lname"));
    }

    #[tokio::test]
    async fn patch_with_new_last_name_saves_once() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save().times(1).returning(Ok);

        let result = use_case(repo)
            .patch(
                &RecordId::new("1"),
                Some(Vendor::default().with_last_name("new lname")),
            )
            .await
            .unwrap();

        assert_eq!(result.last_name.as_deref(), Some("new lname"));
    }

    #[tokio::test]
    async fn patch_with_empty_body_never_saves() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save().never();

        let result = use_case(repo)
            .patch(&RecordId::new("1"), Some(Vendor::default()))
            .await
            .unwrap();

        assert_eq!(result, stored_vendor());
    }

    #[tokio::test]
    async fn patch_with_identical_values_never_saves() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save().never();

        let result = use_case(repo)
            .patch(&RecordId::new("1"), Some(Vendor::new("fname", "lname")))
            .await
            .unwrap();

        assert_eq!(result, stored_vendor());
    }

    #[tokio::test]
    async fn patch_of_empty_record_with_empty_body_never_saves() {
        let stored = Vendor::default().with_id(RecordId::new("1"));
        let mut repo = repo_with_stored(Some(stored));
        repo.expect_save().never();

        let result = use_case(repo)
            .patch(&RecordId::new("1"), Some(Vendor::default()))
            .await
            .unwrap();

        assert_eq!(result.first_name.as_deref(), Some(""));
        assert_eq!(result.last_name.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn patch_missing_record_is_not_found() {
        let mut repo = repo_with_stored(None);
        repo.expect_save().never();

        let err = use_case(repo)
            .patch(&RecordId::new("1"), Some(Vendor::new("a", "b")))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::NotFound {
                kind: "Vendor",
                id: RecordId::new("1"),
            }
        );
    }

    #[tokio::test]
    async fn patch_without_body_is_invalid_argument() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save().never();

        let err = use_case(repo)
            .patch(&RecordId::new("1"), None)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::InvalidArgument("Request vendor is null".to_string())
        );
    }

    #[tokio::test]
    async fn patch_propagates_store_failure() {
        let mut repo = repo_with_stored(Some(stored_vendor()));
        repo.expect_save()
            .returning(|_| Err(StoreError::Query("write failed".to_string())));

        let err = use_case(repo)
            .patch(
                &RecordId::new("1"),
                Some(Vendor::default().with_first_name("x")),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::Store(StoreError::Query("write failed".to_string()))
        );
    }

    #[tokio::test]
    async fn replace_forces_path_id_and_always_saves() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_save()
            .withf(|c| c.id == Some(RecordId::new("path-id")))
            .times(1)
            .returning(Ok);
        let use_case = ManageRecordsUseCase::new(Arc::new(repo));

        let body = Category::new("Fruits").with_id(RecordId::new("body-id"));
        let saved = use_case
            .replace(RecordId::new("path-id"), body)
            .await
            .unwrap();

        assert_eq!(saved.id, Some(RecordId::new("path-id")));
    }

    #[tokio::test]
    async fn create_strips_ids_before_saving() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_save_all()
            .withf(|records| records.len() == 2 && records.iter().all(|c| c.id.is_none()))
            .times(1)
            .returning(Ok);
        let use_case = ManageRecordsUseCase::new(Arc::new(repo));

        let created = use_case
            .create(vec![
                Category::new("Fruits").with_id(RecordId::new("client-id")),
                Category::new("Meats"),
            ])
            .await
            .unwrap();

        assert_eq!(created, 2);
    }

    #[tokio::test]
    async fn create_with_no_candidates_succeeds() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_save_all().times(1).returning(Ok);
        let use_case = ManageRecordsUseCase::new(Arc::new(repo));

        assert_eq!(use_case.create(Vec::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_missing_is_none_not_error() {
        let repo = repo_with_stored(None);

        let found = use_case(repo).get(&RecordId::new("1")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let mut repo = MockVendorRepo::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                Vendor::new("fname1", "lname1"),
                Vendor::new("fname2", "lname2"),
            ])
        });

        let vendors = use_case(repo).list().await.unwrap();
        assert_eq!(vendors.len(), 2);
    }
}

//! Catalog Bootstrap Service
//!
//! Resets both collections to a fixed demo data set on startup.

use std::sync::Arc;

use crate::domain::catalog::{Category, RecordRepository, StoreError, Vendor};

/// Counts observed after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Vendors in the store after seeding.
    pub vendors: u64,
    /// Categories in the store after seeding.
    pub categories: u64,
}

/// Clears and reseeds the vendor and category collections.
pub struct BootstrapService<V, C>
where
    V: RecordRepository<Vendor>,
    C: RecordRepository<Category>,
{
    vendors: Arc<V>,
    categories: Arc<C>,
}

impl<V, C> BootstrapService<V, C>
where
    V: RecordRepository<Vendor>,
    C: RecordRepository<Category>,
{
    /// Create a new `BootstrapService`.
    pub const fn new(vendors: Arc<V>, categories: Arc<C>) -> Self {
        Self {
            vendors,
            categories,
        }
    }

    /// Seed vendors, then categories.
    ///
    /// # Errors
    ///
    /// Returns the first store failure; later steps are skipped.
    pub async fn run(&self) -> Result<BootstrapReport, StoreError> {
        let vendors = self.seed_vendors().await?;
        let categories = self.seed_categories().await?;

        Ok(BootstrapReport {
            vendors,
            categories,
        })
    }

    async fn seed_vendors(&self) -> Result<u64, StoreError> {
        self.vendors.delete_all().await?;

        for vendor in [
            Vendor::new("John", "Johnson"),
            Vendor::new("Mike", "Mikeson"),
            Vendor::new("Paul", "Paulson"),
        ] {
            self.vendors.save(vendor).await?;
        }

        let count = self.vendors.count().await?;
        tracing::debug!(count, "Saved vendors");
        Ok(count)
    }

    async fn seed_categories(&self) -> Result<u64, StoreError> {
        self.categories.delete_all().await?;

        for description in ["Fruits", "Vegetables", "Meats"] {
            self.categories.save(Category::new(description)).await?;
        }

        let count = self.categories.count().await?;
        tracing::debug!(count, "Saved categories");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Record;
    use crate::domain::shared::RecordId;
    use crate::infrastructure::persistence::InMemoryRecordRepository;

    #[tokio::test]
    async fn seeds_three_of_each() {
        let vendors = Arc::new(InMemoryRecordRepository::<Vendor>::new());
        let categories = Arc::new(InMemoryRecordRepository::<Category>::new());

        let report = BootstrapService::new(Arc::clone(&vendors), Arc::clone(&categories))
            .run()
            .await
            .unwrap();

        assert_eq!(
            report,
            BootstrapReport {
                vendors: 3,
                categories: 3,
            }
        );

        let mut descriptions: Vec<String> = categories
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.description)
            .collect();
        descriptions.sort();
        assert_eq!(descriptions, ["Fruits", "Meats", "Vegetables"]);
    }

    #[tokio::test]
    async fn existing_records_are_cleared_first() {
        let vendors = Arc::new(InMemoryRecordRepository::<Vendor>::new());
        let categories = Arc::new(InMemoryRecordRepository::<Category>::new());
        vendors.insert(RecordId::new("stale"), Vendor::new("Old", "Vendor"));

        BootstrapService::new(Arc::clone(&vendors), Arc::clone(&categories))
            .run()
            .await
            .unwrap();

        assert_eq!(vendors.len(), 3);
        let all = vendors.find_all().await.unwrap();
        assert!(all.iter().all(|v| v.id() != Some(&RecordId::new("stale"))));
    }
}

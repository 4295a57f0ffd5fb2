//! Dependency Injection Container
//!
//! Wires the two record repositories into use cases and services.

use std::sync::Arc;

use crate::application::services::BootstrapService;
use crate::application::use_cases::ManageRecordsUseCase;
use crate::domain::catalog::{Category, RecordRepository, Vendor};
use crate::infrastructure::http::AppState;

/// Dependency injection container.
///
/// Generic over the store adapter so the same wiring serves the in-memory
/// and Turso backends.
pub struct Container<V, C>
where
    V: RecordRepository<Vendor> + 'static,
    C: RecordRepository<Category> + 'static,
{
    vendor_repo: Arc<V>,
    category_repo: Arc<C>,
}

impl<V, C> Container<V, C>
where
    V: RecordRepository<Vendor> + 'static,
    C: RecordRepository<Category> + 'static,
{
    /// Create a new container over both repositories.
    pub const fn new(vendor_repo: Arc<V>, category_repo: Arc<C>) -> Self {
        Self {
            vendor_repo,
            category_repo,
        }
    }

    /// Get the vendor repository.
    pub fn vendor_repo(&self) -> Arc<V> {
        Arc::clone(&self.vendor_repo)
    }

    /// Get the category repository.
    pub fn category_repo(&self) -> Arc<C> {
        Arc::clone(&self.category_repo)
    }

    /// Create the vendor use case.
    pub fn vendors_use_case(&self) -> ManageRecordsUseCase<Vendor, V> {
        ManageRecordsUseCase::new(Arc::clone(&self.vendor_repo))
    }

    /// Create the category use case.
    pub fn categories_use_case(&self) -> ManageRecordsUseCase<Category, C> {
        ManageRecordsUseCase::new(Arc::clone(&self.category_repo))
    }

    /// Create the startup seeding service.
    pub fn bootstrap_service(&self) -> BootstrapService<V, C> {
        BootstrapService::new(
            Arc::clone(&self.vendor_repo),
            Arc::clone(&self.category_repo),
        )
    }

    /// Build the HTTP application state.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<V, C> {
        AppState {
            vendors: Arc::new(self.vendors_use_case()),
            categories: Arc::new(self.categories_use_case()),
            version: version.into(),
        }
    }
}

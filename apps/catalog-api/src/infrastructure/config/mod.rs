//! Configuration Module
//!
//! Settings loading and dependency injection for the catalog service.

mod container;
mod settings;

pub use container::Container;
pub use settings::{ConfigError, ServerSettings, ServiceConfig, StoreBackend, StoreSettings};

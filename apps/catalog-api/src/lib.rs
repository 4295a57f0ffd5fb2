// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::default_trait_access
    )
)]

//! Catalog API - Rust Core Library
//!
//! Asynchronous CRUD service for vendors and categories.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: records, the patch merge engine, the repository port
//!   - `catalog`: `Vendor`, `Category`, `Mergeable`, `RecordRepository`
//!   - `shared`: `RecordId`
//!
//! - **Application**: use cases and orchestration
//!   - `use_cases`: `ManageRecordsUseCase` (list, get, create, replace, patch)
//!   - `services`: `BootstrapService` (startup seeding)
//!
//! - **Infrastructure**: adapters
//!   - `http`: Axum router and server
//!   - `persistence`: in-memory and Turso record stores
//!   - `config`: environment settings and dependency injection container
//!   - `telemetry`: tracing subscriber and optional OTLP export

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and services.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::catalog::{
    Category, Mergeable, PatchOutcome, Record, RecordError, RecordRepository, StoreError, Vendor,
    merge,
};
pub use domain::shared::RecordId;

// Application re-exports
pub use application::services::{BootstrapReport, BootstrapService};
pub use application::use_cases::ManageRecordsUseCase;

// Infrastructure re-exports
pub use infrastructure::config::{Container, ServiceConfig, StoreBackend};
pub use infrastructure::http::{AppState, HttpServer, ServerError, create_router};
pub use infrastructure::persistence::{InMemoryRecordRepository, TursoRecordRepository, TursoStore};

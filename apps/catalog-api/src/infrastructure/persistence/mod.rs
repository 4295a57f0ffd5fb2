//! Persistence Adapters
//!
//! Store implementations of the [`RecordRepository`] port.
//!
//! [`RecordRepository`]: crate::domain::catalog::RecordRepository

pub mod in_memory;
pub mod turso_store;

pub use in_memory::InMemoryRecordRepository;
pub use turso_store::{TursoRecordRepository, TursoStore};

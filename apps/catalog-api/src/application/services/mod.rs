//! Application Services
//!
//! Startup services that run outside the request path.

mod bootstrap;

pub use bootstrap::{BootstrapReport, BootstrapService};

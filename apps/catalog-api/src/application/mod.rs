//! Application Layer
//!
//! Use cases orchestrating the domain against the repository port, plus the
//! startup services.

pub mod services;
pub mod use_cases;

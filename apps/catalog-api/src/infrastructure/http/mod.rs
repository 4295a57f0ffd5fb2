//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the vendor and category collections.

mod controller;
mod error;
mod request;
mod response;
mod server;

pub use controller::{AppState, CATEGORIES_BASE_URL, VENDORS_BASE_URL, create_router};
pub use error::ApiError;
pub use request::*;
pub use response::*;
pub use server::{HttpServer, ServerError};

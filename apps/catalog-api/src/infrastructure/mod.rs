//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain, following hexagonal
//! architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: in-memory and Turso record stores
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST controllers for vendors and categories
//!
//! - **Cross-cutting**
//!   - `config/`: settings and dependency wiring
//!   - `telemetry/`: tracing subscriber and OpenTelemetry export

pub mod config;
pub mod http;
pub mod persistence;
pub mod telemetry;

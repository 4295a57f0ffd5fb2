//! Service Configuration Settings
//!
//! Configuration types for the catalog service, loaded from environment
//! variables.

use std::net::SocketAddr;
use std::str::FromStr;

/// Which store adapter backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Process-local maps, lost on restart.
    #[default]
    Memory,
    /// Embedded Turso database file.
    Turso,
}

impl StoreBackend {
    /// Get the backend name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Turso => "turso",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "turso" => Ok(Self::Turso),
            other => Err(ConfigError::InvalidValue {
                key: "CATALOG_STORE".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind address.
    pub bind_address: String,
    /// HTTP port.
    pub http_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}

impl ServerSettings {
    /// Socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the bind address is not an IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.http_port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "CATALOG_BIND_ADDRESS".to_string(),
                value: self.bind_address.clone(),
            })
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Store adapter.
    pub backend: StoreBackend,
    /// Database file for the Turso backend.
    pub db_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            db_path: "./data/catalog.db".to_string(),
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Record store settings.
    pub store: StoreSettings,
    /// Clear and reseed both collections on startup.
    pub bootstrap: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            store: StoreSettings::default(),
            bootstrap: true,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CATALOG_STORE` names an unknown backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `CATALOG_STORE` names an unknown backend.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server = ServerSettings {
            bind_address: lookup("CATALOG_BIND_ADDRESS")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.server.bind_address),
            http_port: lookup("CATALOG_HTTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server.http_port),
        };

        let store = StoreSettings {
            backend: lookup("CATALOG_STORE")
                .map(|v| v.parse::<StoreBackend>())
                .transpose()?
                .unwrap_or(defaults.store.backend),
            db_path: lookup("CATALOG_DB_PATH")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.store.db_path),
        };

        let bootstrap = lookup("CATALOG_BOOTSTRAP")
            .map_or(defaults.bootstrap, |v| parse_flag(&v, defaults.bootstrap));

        Ok(Self {
            server,
            store,
            bootstrap,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be used.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

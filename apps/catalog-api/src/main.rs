//! Catalog API Binary
//!
//! Starts the vendor/category catalog service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-api
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_HTTP_PORT`: HTTP server port (default: 8080)
//! - `CATALOG_BIND_ADDRESS`: bind address (default: 0.0.0.0)
//! - `CATALOG_STORE`: memory | turso (default: memory)
//! - `CATALOG_DB_PATH`: Turso database file (default: ./data/catalog.db)
//! - `CATALOG_BOOTSTRAP`: seed sample data on start (default: true)
//! - `OTEL_ENABLED`: export traces over OTLP (default: false)
//! - `RUST_LOG`: Log level (default: info)

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use catalog_api::domain::catalog::{Category, RecordRepository, Vendor};
use catalog_api::infrastructure::config::{Container, ServiceConfig, StoreBackend};
use catalog_api::infrastructure::http::{
    CATEGORIES_BASE_URL, HttpServer, VENDORS_BASE_URL, create_router,
};
use catalog_api::infrastructure::persistence::{InMemoryRecordRepository, TursoStore};
use catalog_api::infrastructure::telemetry;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    let _telemetry = telemetry::init();

    tracing::info!("Starting Catalog API");

    let config = ServiceConfig::from_env().context("invalid configuration")?;
    log_config(&config);

    match config.store.backend {
        StoreBackend::Memory => {
            let container = Container::new(
                Arc::new(InMemoryRecordRepository::<Vendor>::new()),
                Arc::new(InMemoryRecordRepository::<Category>::new()),
            );
            serve(&container, &config).await?;
        }
        StoreBackend::Turso => {
            ensure_parent_dir(&config.store.db_path)?;
            let store = TursoStore::open(&config.store.db_path)
                .await
                .with_context(|| format!("failed to open {}", config.store.db_path))?;
            let container = Container::new(
                Arc::new(store.collection::<Vendor>().await?),
                Arc::new(store.collection::<Category>().await?),
            );
            serve(&container, &config).await?;
        }
    }

    tracing::info!("Catalog API stopped");
    Ok(())
}

/// Seed the store if configured, then serve HTTP until a shutdown signal.
async fn serve<V, C>(container: &Container<V, C>, config: &ServiceConfig) -> anyhow::Result<()>
where
    V: RecordRepository<Vendor> + 'static,
    C: RecordRepository<Category> + 'static,
{
    if config.bootstrap {
        let report = container
            .bootstrap_service()
            .run()
            .await
            .context("bootstrap failed")?;
        tracing::info!(
            vendors = report.vendors,
            categories = report.categories,
            "Sample data loaded"
        );
    }

    let app = create_router(container.app_state(env!("CARGO_PKG_VERSION")));
    let addr = config.server.socket_addr()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    for base in [VENDORS_BASE_URL, CATEGORIES_BASE_URL] {
        tracing::info!("  GET|POST {base}");
        tracing::info!("  GET|PUT|PATCH {base}/{{id}}");
    }

    let shutdown_token = CancellationToken::new();
    let server = HttpServer::new(addr, app, shutdown_token.clone());

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_token.cancel();
    });

    server.run().await?;
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        bind_address = %config.server.bind_address,
        http_port = config.server.http_port,
        store = config.store.backend.as_str(),
        bootstrap = config.bootstrap,
        "Configuration loaded"
    );
}

/// Create the directory holding the database file.
fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Load .env file from the nearest ancestor directory that has one.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}

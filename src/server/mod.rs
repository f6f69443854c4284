// src/server/mod.rs
//! Larder HTTP server - REST API over the recipe catalog
//!
//! This module provides an HTTP server that:
//! - Lists, creates, updates and deletes recipes with nested ingredients
//! - Lists and manages ingredients on their own
//! - Runs each request in its own SQLite transaction
//! - Reports failures as RFC 7807 problem documents

pub mod config;
mod handlers;
pub mod problem;
mod routes;

pub use config::CatalogConfig;
pub use problem::{ApiError, ApiJson, ApiProblem, ApiQuery, ApiResult};
pub use routes::create_router;

use crate::db;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the catalog database
    pub db_path: PathBuf,
    /// CORS allowed origins (empty = allow any)
    pub cors_allowed_origins: Vec<String>,
    /// Gzip-compress responses
    pub enable_compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: PathBuf::from(config::DEFAULT_DB_PATH),
            cors_allowed_origins: Vec::new(),
            enable_compression: true,
        }
    }
}

impl ServerConfig {
    /// Create a new configuration with a custom database path
    pub fn with_db_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.db_path = path.into();
        self
    }

    /// Set the bind address
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

/// Shared server state type
pub type SharedState = Arc<CatalogState>;

/// State shared across handlers
pub struct CatalogState {
    pub config: ServerConfig,
}

impl CatalogState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Open a database connection
    ///
    /// Creates a new connection per call. This should be called from within
    /// `spawn_blocking` for async handlers.
    pub fn open_db(&self) -> crate::Result<rusqlite::Connection> {
        db::open(&self.config.db_path)
    }
}

/// Start the Larder server and serve until Ctrl-C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting Larder server on {}", config.bind_addr);
    info!("Database: {:?}", config.db_path);

    db::init(&config.db_path)
        .with_context(|| format!("Failed to initialize database {}", config.db_path.display()))?;

    let state = Arc::new(CatalogState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Larder is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, serve until the process is killed
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(config.enable_compression);
    }

    #[test]
    fn test_open_db_uses_configured_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("larder.db");
        db::init(&db_path).unwrap();

        let state = CatalogState::new(ServerConfig::default().with_db_path(&db_path));
        let conn = state.open_db().unwrap();
        let version = db::schema::get_schema_version(&conn).unwrap();
        assert_eq!(version, db::schema::SCHEMA_VERSION);
    }
}

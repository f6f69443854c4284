// src/server/config.rs
//! Configuration file parsing for the Larder server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, CORS origins, compression
//! - [storage] - Database location
//! - [logging] - Default tracing filter

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default database location
pub const DEFAULT_DB_PATH: &str = "/var/lib/larder/larder.db";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// API bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allowed CORS origins (empty = any)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Gzip response compression
    #[serde(default = "default_true")]
    pub compression: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origins: Vec::new(),
            compression: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// Logging configuration section
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl CatalogConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CatalogConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        for origin in &self.server.cors_origins {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid server.cors_origins entry: {}", origin))?;
        }

        if self.storage.db_path.as_os_str().is_empty() {
            anyhow::bail!("storage.db_path must not be empty");
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            db_path: self.storage.db_path.clone(),
            cors_allowed_origins: self.server.cors_origins.clone(),
            enable_compression: self.server.compression,
        })
    }
}

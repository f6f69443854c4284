// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::server::config::DEFAULT_DB_PATH;
use larder::{CatalogConfig, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about = "Recipe catalog service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the catalog database
    Init {
        /// Database path
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: PathBuf,
    },
    /// Serve the REST API
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// Database path (overrides the config file)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },
}

/// Initialize tracing subscriber, preferring RUST_LOG over the configured filter
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Merge the optional config file with command-line overrides
fn resolve_server_config(
    config: Option<PathBuf>,
    bind: Option<SocketAddr>,
    db_path: Option<PathBuf>,
) -> Result<(ServerConfig, String)> {
    let file_config = match config {
        Some(path) => CatalogConfig::load(&path)?,
        None => CatalogConfig::new(),
    };

    let mut server_config = file_config.to_server_config()?;
    if let Some(bind) = bind {
        server_config = server_config.with_bind_addr(bind);
    }
    if let Some(db_path) = db_path {
        server_config = server_config.with_db_path(db_path);
    }

    Ok((server_config, file_config.logging.filter))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => {
            init_tracing("info");
            info!("Initializing catalog database at: {}", db_path.display());
            larder::db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path.display());
            Ok(())
        }
        Some(Commands::Serve {
            config,
            bind,
            db_path,
        }) => {
            let (server_config, filter) = resolve_server_config(config, bind, db_path)?;
            init_tracing(&filter);
            larder::run_server(server_config).await
        }
        None => {
            println!("Larder v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'larder --help' for usage information");
            Ok(())
        }
    }
}

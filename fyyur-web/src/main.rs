//! fyyur-web - venue/artist booking service
//!
//! Resolves configuration, opens (or creates) the database, and serves the
//! JSON API until Ctrl+C or SIGTERM.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{ConfigOverrides, LoggingConfig, ServiceConfig};
use fyyur_common::db::init_database;
use fyyur_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue and artist booking service")]
#[command(version)]
struct Args {
    /// Path to SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            database: args.database,
            host: args.host,
            port: args.port,
            config_file: args.config,
        }
    }
}

/// Install the tracing subscriber
///
/// RUST_LOG takes precedence over the configured level. When a log file is
/// configured, events are also written there without ANSI colors.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("fyyur_web={0},fyyur_common={0},tower_http={0}", logging.level).into()
    });

    let file_layer = match &logging.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::resolve(args.into()).context("Failed to resolve configuration")?;

    init_tracing(&config.logging)?;

    info!(
        "Starting Fyyur (fyyur-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database path: {}", config.database_path.display());

    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let app = build_router(AppState::new(pool));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("fyyur-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

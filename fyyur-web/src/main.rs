//! fyyur-web - Venue and artist booking directory
//!
//! Resolves configuration, opens the database, optionally loads the demo
//! listings and serves the site until Ctrl+C or SIGTERM.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_toml_config, CliOverrides, LoggingConfig};
use fyyur_common::db::init_database;
use fyyur_common::Config;
use fyyur_web::db::seed::seed_demo_data;
use fyyur_web::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue and artist booking directory")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config dir>/fyyur/config.toml when present)
    #[arg(short, long, env = "FYYUR_CONFIG")]
    config: Option<PathBuf>,

    /// sqlx database URL, e.g. sqlite:///var/lib/fyyur/fyyur.db
    #[arg(long, env = "FYYUR_DATABASE_URL")]
    database_url: Option<String>,

    /// Address to bind
    #[arg(long, env = "FYYUR_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    port: Option<u16>,

    /// Key used to sign flash cookies
    #[arg(long, env = "FYYUR_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FYYUR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Also append logs to this file
    #[arg(long, env = "FYYUR_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Load the demo venues, artists and shows into an empty database
    #[arg(long)]
    seed_demo: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            database_url: self.database_url.clone(),
            host: self.host.clone(),
            port: self.port,
            secret_key: self.secret_key.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

/// stderr logging, plus an uncoloured copy in the log file when one is set
///
/// RUST_LOG, when present, replaces the configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    let file_layer = match &logging.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config =
        load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let config = Config::resolve(args.overrides(), file_config);

    init_tracing(&config.logging)?;

    info!(
        "Starting fyyur-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &config.logging.file {
        info!("Logging to {}", path.display());
    }

    let pool = init_database(&config.database_url)
        .await
        .context("Failed to open database")?;

    if args.seed_demo {
        let seeded = seed_demo_data(&pool)
            .await
            .context("Failed to load demo data")?;
        if seeded {
            info!("Demo listings loaded");
        }
    }

    let addr = config.bind_address();
    let state = AppState::new(pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

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
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

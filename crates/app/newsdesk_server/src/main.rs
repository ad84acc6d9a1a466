//! Newsdesk REST API server binary.
//!
//! Binds the router from `newsdesk_api` and owns the database connection
//! manager. The database does not have to be up when the server starts:
//! establishment is attempted once here (to run migrations early) and then
//! on demand per request, so the server comes up either way.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use newsdesk_core::db::{ConnectOptions, ConnectionManager};
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "newsdesk_server", about = "Newsdesk REST API server")]
struct Args {
    /// Port to listen on. Overrides the port in `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 50)]
    max_connections: u32,

    /// Minimum number of idle connections the pool keeps open.
    #[arg(long, default_value_t = 10)]
    min_connections: u32,

    /// Seconds before a connection establishment attempt is abandoned.
    #[arg(long, default_value_t = 30)]
    connect_timeout_secs: u64,

    /// Seconds a request may wait for a pooled connection.
    #[arg(long, default_value_t = 30)]
    acquire_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,newsdesk_api=debug,newsdesk_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();
    let mut config = newsdesk_api::config::ApiConfig::from_env()?;
    if let Some(port) = args.port {
        config.bind_addr = format!("127.0.0.1:{port}");
    }

    info!(bind_addr = %config.bind_addr, "starting newsdesk_server");

    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.max_connections = args.max_connections;
    opts.min_connections = args.min_connections;
    opts.connect_timeout = Duration::from_secs(args.connect_timeout_secs);
    opts.acquire_timeout = Duration::from_secs(args.acquire_timeout_secs);

    let manager = Arc::new(ConnectionManager::new(opts));

    // Try once now so migrations run before traffic arrives. A failure is
    // not fatal: the per-request gate keeps retrying until the database
    // comes up.
    match manager.ensure_connected().await {
        Ok(pool) => {
            info!("running database migrations");
            newsdesk_api::migrate(&pool).await?;
        }
        Err(e) => {
            warn!(state = %e.state, error = %e.message, "database not reachable at startup, will retry on demand");
        }
    }

    let state = newsdesk_api::AppState {
        db: manager.clone(),
        config: config.clone(),
    };
    let app = newsdesk_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    manager.disconnect().await;
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

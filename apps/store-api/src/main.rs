//! # Grocer Store API
//!
//! REST server exposing the in-memory ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store API Server                                 │
//! │                                                                         │
//! │  HTTP client ───► Axum (8000) ───► /api/v1 handlers ───► LedgerState  │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                                                      Process memory     │
//! │                                                   (nothing persists)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod routes;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grocer_ledger::LedgerState;

use crate::config::StoreConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Grocer store API server...");

    // Load configuration
    let config = StoreConfig::load()?;
    info!(port = config.http_port, seed = config.seed, "Configuration loaded");

    // Create shared state
    let state = if config.seed {
        LedgerState::seeded()
    } else {
        LedgerState::new()
    };

    // Build the router
    let app = routes::router(state);

    // Bind the listener
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Store API server started");

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

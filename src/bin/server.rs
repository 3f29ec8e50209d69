//! # Client Config Server
//!
//! Standalone binary serving `GET /config/client-env` and the health probes.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration (binds 0.0.0.0:8000)
//! SUPABASE_URL=https://abc.supabase.co SUPABASE_KEY=eyJ... cargo run --bin client-config-server
//!
//! # Override the bind address
//! CONFIG_SERVER__WEB__BIND_ADDRESS=127.0.0.1:9000 cargo run --bin client-config-server
//! ```

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use client_config_server::bootstrap::ServerBootstrap;
use client_config_server::config::ConfigLoader;
use client_config_server::logging;
use client_config_server::web::ClientEnvWebState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in .env; load it before tracing reads LOG_FORMAT/RUST_LOG
    dotenvy::dotenv().ok();
    logging::init_tracing();

    info!("🚀 Starting Client Config Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let config = ConfigLoader::load_from_env().context("Failed to load configuration")?;
    let state = Arc::new(ClientEnvWebState::from_process(config));
    info!("   Environment: {}", state.environment);

    let handle = ServerBootstrap::start(state)
        .await
        .context("Failed to start web server")?;

    info!("🎉 Client Config Server started on {}", handle.base_url());
    info!("   Press Ctrl+C to shutdown gracefully");

    shutdown_signal().await;

    info!("🛑 Shutdown signal received, initiating graceful shutdown...");
    if let Err(e) = handle.shutdown().await {
        error!("Failed to stop web server cleanly: {}", e);
    } else {
        info!("👋 Client Config Server shutdown complete");
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}

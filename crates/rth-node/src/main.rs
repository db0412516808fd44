//! # RTH-Engine Node Runtime
//!
//! Entry point for the consensus gateway: initializes telemetry, wires the
//! in-memory adapters into the session service, and serves the HTTP API.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from environment (`RTH_*`)
//! 2. Initialize telemetry (tracing subscriber + metrics registry)
//! 3. Build adapters and the session service
//! 4. Bind and serve, shutting down gracefully on ctrl-c
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RTH_LISTEN_ADDR` | `127.0.0.1:8707` | HTTP bind address |
//! | `RTH_LOG_LEVEL` | `info` | Log level filter |
//! | `RTH_JSON_LOGS` | `false` | JSON log output |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use rth_gateway::{router, InMemorySessionStore, InMemoryVerifierDirectory, SessionService};
use rth_telemetry::{init_telemetry, TelemetryConfig};

/// Node configuration from environment variables.
#[derive(Debug, Clone)]
struct NodeConfig {
    listen_addr: SocketAddr,
    telemetry: TelemetryConfig,
}

impl NodeConfig {
    fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("RTH_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8707".to_string())
            .parse()
            .context("invalid RTH_LISTEN_ADDR")?;
        Ok(Self {
            listen_addr,
            telemetry: TelemetryConfig::from_env(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env()?;
    init_telemetry(&config.telemetry).context("telemetry init failed")?;

    let store = Arc::new(InMemorySessionStore::new());
    let directory = Arc::new(InMemoryVerifierDirectory::new());
    let service = Arc::new(SessionService::new(store, directory));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "RTH gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("RTH gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

//! Restaurant API Binary
//!
//! Serves the ordering REST API and the built frontend.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin restaurant-api
//! ```
//!
//! # Environment Variables
//!
//! All optional:
//! - `PORT`: HTTP server port (default: 5001)
//! - `BIND_ADDRESS`: Interface to bind (default: 0.0.0.0)
//! - `STATIC_DIR`: Built frontend assets (default: ./dist)
//! - `METRICS_PORT`: Prometheus listener port, 0 disables (default: 0)
//! - `RUST_LOG`: Log filter (default: `restaurant_api=info,tower_http=info`)

use std::sync::Arc;

use anyhow::Context;
use restaurant_api::application::Storage;
use restaurant_api::infrastructure::config::{ServerConfig, load_dotenv};
use restaurant_api::infrastructure::http::{AppState, create_app};
use restaurant_api::infrastructure::persistence::InMemoryStore;
use restaurant_api::observability::{MetricsConfig, init_metrics, init_tracing};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Restaurant API");

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    tracing::info!(
        http_addr = %config.http_addr(),
        static_dir = %config.static_dir.display(),
        metrics_port = config.metrics_port,
        "Configuration loaded"
    );

    if let Some(addr) = config.metrics_addr() {
        if let Err(e) = init_metrics(&MetricsConfig::with_addr(addr)) {
            tracing::warn!(error = %e, "Failed to start metrics exporter, continuing without it");
        }
    }

    let store = Arc::new(InMemoryStore::new());
    tracing::info!(menu_items = store.list_menu_items().len(), "Menu catalog seeded");

    let app = create_app(AppState::new(store), &config);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET   /health");
    tracing::info!("  GET   /api/menu");
    tracing::info!("  GET   /api/menu/{{category}}");
    tracing::info!("  GET   /api/orders");
    tracing::info!("  POST  /api/orders");
    tracing::info!("  GET   /api/orders/{{id}}");
    tracing::info!("  PATCH /api/orders/{{id}}/status");
    tracing::info!("  GET   /api/contact");
    tracing::info!("  POST  /api/contact");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Restaurant API stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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

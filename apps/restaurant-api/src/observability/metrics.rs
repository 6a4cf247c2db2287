//! Prometheus metrics for the ordering backend.
//!
//! Recording functions are no-ops until [`init_metrics`] installs a
//! recorder, so the store can call them unconditionally.

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub const fn with_addr(addr: SocketAddr) -> Self {
        Self { listen_addr: addr }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP listener that exposes metrics at `/metrics`. Must be
/// called from inside a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Record a newly stored order.
///
/// Orders are never removed, so the stored gauge only moves up.
pub fn record_order_created() {
    counter!("orders_created_total").increment(1);
    gauge!("orders_stored").increment(1.0);
}

/// Record a status update attempt and whether the order existed.
pub fn record_order_status_update(found: bool) {
    counter!(
        "order_status_updates_total",
        "found" => if found { "true" } else { "false" }
    )
    .increment(1);
}

/// Record a newly stored contact message.
pub fn record_contact_message_created() {
    counter!("contact_messages_created_total").increment(1);
}

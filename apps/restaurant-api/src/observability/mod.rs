//! Observability module for logging and metrics.

mod logging;
mod metrics;

pub use self::logging::{DEFAULT_DIRECTIVES, env_filter, init_tracing};
pub use self::metrics::{
    MetricsConfig, MetricsError, init_metrics, record_contact_message_created,
    record_order_created, record_order_status_update,
};

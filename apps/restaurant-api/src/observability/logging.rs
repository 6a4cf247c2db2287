//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Directives applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "restaurant_api=info,tower_http=info";

/// Build the log filter from `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global `fmt` subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init();
}

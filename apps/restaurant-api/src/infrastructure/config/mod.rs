//! Configuration Module
//!
//! Environment-driven settings for the HTTP server.

mod settings;

pub use settings::{ConfigError, DEFAULT_PORT, DEFAULT_STATIC_DIR, ServerConfig, load_dotenv};

//! Server Configuration Settings
//!
//! Loaded from environment variables, optionally seeded from a `.env` file.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5001;

/// Default directory holding the built front-end.
pub const DEFAULT_STATIC_DIR: &str = "./dist";

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to listen on.
    pub bind_address: IpAddr,
    /// HTTP port (`PORT`).
    pub port: u16,
    /// Front-end build output served for non-API paths (`STATIC_DIR`).
    pub static_dir: PathBuf,
    /// Prometheus listener port; 0 disables the exporter (`METRICS_PORT`).
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            metrics_port: 0,
        }
    }
}

impl ServerConfig {
    /// Create configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BIND_ADDRESS` is set but is not an IP address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unparsable ports fall back to their defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if `BIND_ADDRESS` is set but is not an IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "BIND_ADDRESS".to_string(),
                    value: raw,
                })?,
            None => defaults.bind_address,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.static_dir, PathBuf::from);

        Ok(Self {
            bind_address,
            port: parse_port(&lookup, "PORT", defaults.port),
            static_dir,
            metrics_port: parse_port(&lookup, "METRICS_PORT", defaults.metrics_port),
        })
    }

    /// Address the HTTP server binds to.
    #[must_use]
    pub const fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Address of the metrics listener, if enabled.
    #[must_use]
    pub const fn metrics_addr(&self) -> Option<SocketAddr> {
        if self.metrics_port == 0 {
            None
        } else {
            Some(SocketAddr::new(self.bind_address, self.metrics_port))
        }
    }

    /// Path of the SPA entry document.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be used.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

fn parse_port<F>(lookup: &F, key: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default, "Invalid port, using default");
            default
        }),
        None => default,
    }
}

/// Load `.env` from the current directory or the nearest ancestor that has
/// one. A missing file is not an error.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

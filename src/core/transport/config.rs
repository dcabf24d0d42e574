//! HTTP transport configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory holding the single-page frontend (`index.html` and assets).
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: default_host(),
            frontend_dir: default_frontend_dir(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address, other settings default.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        let cors = if self.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        format!("HTTP on {} (CORS {})", self.address(), cors)
    }
}

//! Configuration management for the knowledge base server.
//!
//! This module provides a centralized configuration structure that is
//! populated from environment variables (and an optional `.env` file) on top
//! of defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use super::transport::HttpConfig;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Candidate base directories searched for data files, first match wins.
    pub data_dirs: Vec<PathBuf>,

    /// What to do with records that fail their schema on read.
    pub validation: ValidationMode,
}

/// Schema validation policy applied on the read path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Do not validate.
    Off,
    /// Log failing records and forward the payload unchanged.
    #[default]
    Warn,
    /// Refuse payloads holding failing records.
    Reject,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "false" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(format!("unknown validation mode: {}", other)),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "backend/data";

/// Environment variables holding the listen port, highest priority first.
pub const PORT_VARS: [&str; 3] = ["KB_PORT", "PORT", "HTTP_PLATFORM_PORT"];

/// Environment variables holding the bind host, highest priority first.
pub const HOST_VARS: [&str; 2] = ["KB_HOST", "HOST"];

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            data_dirs: vec![PathBuf::from(DEFAULT_DATA_DIR)],
            validation: ValidationMode::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "clinic-kb-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// See [`Config::from_lookup`] for the variables read.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// - port: `KB_PORT`, then `PORT`, then `HTTP_PLATFORM_PORT`
    /// - host: `KB_HOST`, then `HOST`
    /// - `KB_DATA_DIRS`: candidate directories in platform path-list syntax
    /// - `KB_FRONTEND_DIR`, `KB_CORS`, `KB_LOG_LEVEL`, `KB_VALIDATION`,
    ///   `KB_SERVER_NAME`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("KB_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("KB_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(port) = first_port(&lookup) {
            config.http.port = port;
        }

        if let Some(host) = HOST_VARS.iter().find_map(|var| lookup(var)) {
            config.http.host = host;
        }

        if let Some(frontend_dir) = lookup("KB_FRONTEND_DIR") {
            config.http.frontend_dir = PathBuf::from(frontend_dir);
        }

        if let Some(cors) = lookup("KB_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Some(dirs) = lookup("KB_DATA_DIRS") {
            let data_dirs: Vec<PathBuf> = std::env::split_paths(&dirs)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if data_dirs.is_empty() {
                warn!("KB_DATA_DIRS is empty, keeping default {}", DEFAULT_DATA_DIR);
            } else {
                info!("Data directories loaded from environment: {:?}", data_dirs);
                config.resources.data_dirs = data_dirs;
            }
        }

        if let Some(mode) = lookup("KB_VALIDATION") {
            match mode.parse::<ValidationMode>() {
                Ok(mode) => config.resources.validation = mode,
                Err(e) => warn!("{}, keeping {}", e, config.resources.validation),
            }
        }

        config
    }
}

/// The first port variable that holds a valid port number.
fn first_port<F>(lookup: &F) -> Option<u16>
where
    F: Fn(&str) -> Option<String>,
{
    for var in PORT_VARS {
        let Some(raw) = lookup(var) else {
            continue;
        };
        match raw.trim().parse() {
            Ok(port) => return Some(port),
            Err(_) => warn!("Ignoring {}={:?}: not a valid port", var, raw),
        }
    }
    None
}

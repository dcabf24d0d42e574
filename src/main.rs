//! Knowledge Base Server Entry Point
//!
//! Initializes logging, loads configuration and serves the HTTP API.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clinic_kb_server::core::{Config, KnowledgeBaseServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Schema validation on read: {}", config.resources.validation);

    if !config.resources.data_dirs.iter().any(|dir| dir.is_dir()) {
        warn!(
            "None of the data directories exist yet ({:?}); resource endpoints will report not found",
            config.resources.data_dirs
        );
    }

    let server = KnowledgeBaseServer::new(config);

    info!("Server initialized");

    server.serve().await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

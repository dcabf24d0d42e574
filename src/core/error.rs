//! Error types and handling for the knowledge base server.
//!
//! Request-level failures stay in their domain (`ResourceError`) and are
//! rendered per request; this type covers what can stop the server itself.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for running the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

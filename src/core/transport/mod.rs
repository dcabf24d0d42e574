//! Transport layer for the knowledge base server.
//!
//! The server speaks plain HTTP: a small JSON API under `/api`, the
//! single-page frontend at `/` and its assets under `/static`.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
